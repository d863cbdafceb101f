//! Session state shared by every part of the console that needs to know who
//! is signed in.
//!
//! The token and user profile are persisted through a [`SessionStore`] so the
//! browser build can back it with local storage while tests use memory.
//! Components never read the store directly; they hold a [`SessionContext`]
//! and subscribe to [`SessionEvent`]s.

use crate::auth::gate::AuthStatus;
use crate::types::{AppError, Result};
use parking_lot::{Mutex, RwLock};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Storage key of the session token
pub const DEFAULT_TOKEN_KEY: &str = "token";
/// Storage key of the serialized user profile
pub const DEFAULT_USER_KEY: &str = "user";

/// Values older builds wrote instead of removing the key.
const SENTINELS: [&str; 2] = ["null", "undefined"];

/// Opaque bearer credential. Never empty and never one of the legacy
/// placeholder strings.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(String);

impl SessionToken {
    /// Parses a raw stored value, rejecting placeholders.
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        let raw = raw?.trim();
        if raw.is_empty() || SENTINELS.contains(&raw) {
            return None;
        }
        Some(Self(raw.to_string()))
    }

    pub fn new(raw: impl AsRef<str>) -> Result<Self> {
        Self::parse(Some(raw.as_ref()))
            .ok_or_else(|| AppError::InvalidInput("session token is empty".to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `Authorization` header value
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

// Tokens end up in logs through `{:?}` on structs holding them.
impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(***)")
    }
}

/// Profile blob stored next to the token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Synchronous key/value persistence for the session.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// In-memory store used by tests and native tooling
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a raw token value, including placeholders.
    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        store
            .values
            .lock()
            .insert(DEFAULT_TOKEN_KEY.to_string(), token.to_string());
        store
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.values.lock().remove(key);
        Ok(())
    }
}

/// Change notification delivered to session listeners
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    SignedIn,
    SignedOut,
}

/// Handle returned by [`SessionContext::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Arc<dyn Fn(&SessionEvent) + Send + Sync>;

#[derive(Debug, Default, Clone)]
struct Snapshot {
    token: Option<SessionToken>,
    user: Option<UserProfile>,
}

struct Inner {
    store: Arc<dyn SessionStore>,
    token_key: String,
    user_key: String,
    snapshot: RwLock<Snapshot>,
    listeners: Mutex<Vec<(ListenerId, Listener)>>,
    next_listener: AtomicU64,
}

/// Injected session state. Cheap to clone; clones share the same snapshot and
/// listeners.
#[derive(Clone)]
pub struct SessionContext {
    inner: Arc<Inner>,
}

impl fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionContext")
            .field("token_key", &self.inner.token_key)
            .field("status", &self.status())
            .finish()
    }
}

impl SessionContext {
    /// Loads the session from `store` using the default keys.
    pub fn load(store: Arc<dyn SessionStore>) -> Self {
        Self::load_with_keys(store, DEFAULT_TOKEN_KEY, DEFAULT_USER_KEY)
    }

    pub fn load_with_keys(
        store: Arc<dyn SessionStore>,
        token_key: impl Into<String>,
        user_key: impl Into<String>,
    ) -> Self {
        let ctx = Self {
            inner: Arc::new(Inner {
                store,
                token_key: token_key.into(),
                user_key: user_key.into(),
                snapshot: RwLock::new(Snapshot::default()),
                listeners: Mutex::new(Vec::new()),
                next_listener: AtomicU64::new(1),
            }),
        };

        let snapshot = ctx.read_store();
        *ctx.inner.snapshot.write() = snapshot;
        ctx
    }

    pub fn token(&self) -> Option<SessionToken> {
        self.inner.snapshot.read().token.clone()
    }

    pub fn user(&self) -> Option<UserProfile> {
        self.inner.snapshot.read().user.clone()
    }

    /// The snapshot is loaded synchronously, so this is never
    /// [`AuthStatus::Unknown`].
    pub fn status(&self) -> AuthStatus {
        AuthStatus::from_token(self.inner.snapshot.read().token.as_ref())
    }

    pub fn is_authenticated(&self) -> bool {
        self.status() == AuthStatus::Authenticated
    }

    /// Persists a new session and notifies listeners.
    pub fn sign_in(&self, token: SessionToken, user: Option<UserProfile>) -> Result<()> {
        let store = &self.inner.store;
        store.set(&self.inner.token_key, token.as_str())?;
        match &user {
            Some(profile) => {
                let json = serde_json::to_string(profile)
                    .map_err(|e| AppError::Storage(format!("Failed to encode user: {}", e)))?;
                store.set(&self.inner.user_key, &json)?;
            }
            None => store.remove(&self.inner.user_key)?,
        }

        *self.inner.snapshot.write() = Snapshot {
            token: Some(token),
            user,
        };
        info!("Session signed in");
        self.notify(&SessionEvent::SignedIn);
        Ok(())
    }

    /// Removes the persisted session and notifies listeners.
    pub fn sign_out(&self) -> Result<()> {
        self.inner.store.remove(&self.inner.token_key)?;
        self.inner.store.remove(&self.inner.user_key)?;

        let was_signed_in = {
            let mut snapshot = self.inner.snapshot.write();
            let was = snapshot.token.is_some();
            *snapshot = Snapshot::default();
            was
        };

        if was_signed_in {
            info!("Session signed out");
            self.notify(&SessionEvent::SignedOut);
        }
        Ok(())
    }

    /// Completes an OAuth redirect carrying `token` and an optional JSON
    /// encoded user profile.
    pub fn complete_oauth(&self, token: Option<&str>, user_json: Option<&str>) -> Result<()> {
        let token = SessionToken::parse(token).ok_or_else(|| {
            AppError::InvalidInput("OAuth callback did not include a token".to_string())
        })?;

        let user = match user_json {
            Some(json) => Some(
                serde_json::from_str::<UserProfile>(json)
                    .map_err(|e| AppError::InvalidInput(format!("Invalid user payload: {}", e)))?,
            ),
            None => None,
        };

        self.sign_in(token, user)
    }

    /// Re-reads the store after something outside this context changed it,
    /// such as another tab. Listeners are notified only when the
    /// authentication status flipped.
    pub fn sync_from_store(&self) {
        let fresh = self.read_store();
        let event = {
            let mut snapshot = self.inner.snapshot.write();
            let event = match (snapshot.token.is_some(), fresh.token.is_some()) {
                (false, true) => Some(SessionEvent::SignedIn),
                (true, false) => Some(SessionEvent::SignedOut),
                (true, true) if snapshot.token != fresh.token => Some(SessionEvent::SignedIn),
                _ => None,
            };
            *snapshot = fresh;
            event
        };

        if let Some(event) = event {
            debug!(?event, "Session changed outside this context");
            self.notify(&event);
        }
    }

    /// Registers `listener` for session changes.
    pub fn subscribe<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(&SessionEvent) + Send + Sync + 'static,
    {
        let id = ListenerId(self.inner.next_listener.fetch_add(1, Ordering::Relaxed));
        self.inner.listeners.lock().push((id, Arc::new(listener)));
        id
    }

    pub fn unsubscribe(&self, id: ListenerId) {
        self.inner
            .listeners
            .lock()
            .retain(|(listener_id, _)| *listener_id != id);
    }

    fn notify(&self, event: &SessionEvent) {
        // Listeners may call back into the context, so run them unlocked.
        let listeners: Vec<Listener> = self
            .inner
            .listeners
            .lock()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        for listener in listeners {
            listener(event);
        }
    }

    fn read_store(&self) -> Snapshot {
        let store = &self.inner.store;

        let raw_token = store.get(&self.inner.token_key).unwrap_or_else(|e| {
            warn!("Failed to read session token: {}", e);
            None
        });
        let token = SessionToken::parse(raw_token.as_deref());

        if token.is_none() && raw_token.is_some() {
            debug!("Removing placeholder session token");
            if let Err(e) = store.remove(&self.inner.token_key) {
                warn!("Failed to remove placeholder token: {}", e);
            }
        }

        let user = match store.get(&self.inner.user_key) {
            Ok(Some(json)) if token.is_some() => match serde_json::from_str(&json) {
                Ok(profile) => Some(profile),
                Err(e) => {
                    warn!("Ignoring undecodable user profile: {}", e);
                    None
                }
            },
            Ok(_) => None,
            Err(e) => {
                warn!("Failed to read user profile: {}", e);
                None
            }
        };

        Snapshot { token, user }
    }
}
