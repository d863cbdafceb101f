//! Global application state

use crate::storage::LocalStorageStore;
use crate::types::Genie;
use genie::auth::gate::{AuthStatus, RouteGate};
use genie::auth::session::{SessionContext, SessionEvent, SessionToken, UserProfile};
use genie::types::{Result, Subscription};
use genie::utils::config::ConsoleConfig;
use leptos::prelude::*;
use std::sync::Arc;

/// Global application state
#[derive(Clone)]
pub struct AppState {
    /// Persisted session; the only place the token is read from
    pub session: SessionContext,
    /// Render/redirect rules for the route guards
    pub gate: RouteGate,
    /// Console configuration
    pub config: Arc<ConsoleConfig>,
    /// Gate status; `Unknown` until the first guard has read the session
    pub auth_status: RwSignal<AuthStatus>,
    /// Signed-in user profile
    pub user: RwSignal<Option<UserProfile>>,
    /// Genies owned by the user
    pub genies: RwSignal<Vec<Genie>>,
    /// Subscription activated during this visit
    pub subscription: RwSignal<Option<Subscription>>,
    /// Visible toast notifications
    pub toasts: RwSignal<Vec<crate::components::toast::Toast>>,
}

impl AppState {
    pub fn new() -> Self {
        let config = Arc::new(Self::load_config());
        let session = SessionContext::load_with_keys(
            Arc::new(LocalStorageStore),
            config.session.token_key.clone(),
            config.session.user_key.clone(),
        );
        let gate = RouteGate::new(config.routes.login.clone(), config.routes.home.clone());

        let auth_status = RwSignal::new(AuthStatus::Unknown);
        let user = RwSignal::new(None);

        // Keep the signals in step with sign-in/out from any part of the app
        session.subscribe(move |event| {
            let status = match event {
                SessionEvent::SignedIn => AuthStatus::Authenticated,
                SessionEvent::SignedOut => AuthStatus::Unauthenticated,
            };
            auth_status.set(status);
            if status == AuthStatus::Unauthenticated {
                user.set(None);
            }
        });

        Self {
            session,
            gate,
            config,
            auth_status,
            user,
            genies: RwSignal::new(vec![]),
            subscription: RwSignal::new(None),
            toasts: RwSignal::new(vec![]),
        }
    }

    fn load_config() -> ConsoleConfig {
        let mut config = ConsoleConfig::default();
        let overrides = [
            ("GENIE_API_BASE_URL", option_env!("GENIE_API_BASE_URL")),
            ("GENIE_CHECKOUT_SCRIPT_URL", option_env!("GENIE_CHECKOUT_SCRIPT_URL")),
        ];
        let applied = config.apply_overrides(|name| {
            overrides
                .iter()
                .find(|(key, _)| *key == name)
                .and_then(|&(_, value)| value.map(str::to_string))
        });
        if let Err(e) = applied {
            tracing::warn!("Ignoring build-time configuration: {}", e);
            config = ConsoleConfig::default();
        }
        config
    }

    /// Re-reads the persisted session, e.g. on navigation or when another
    /// tab touched local storage, and publishes the result to the guards.
    pub fn refresh_session(&self) {
        self.session.sync_from_store();
        self.auth_status.set(self.session.status());
        self.user.set(self.session.user());
    }

    pub fn sign_in(&self, token: &str, user: Option<UserProfile>) -> Result<()> {
        let token = SessionToken::new(token)?;
        self.session.sign_in(token, user.clone())?;
        self.user.set(user);
        Ok(())
    }

    pub fn sign_out(&self) {
        if let Err(e) = self.session.sign_out() {
            tracing::error!("Failed to clear session: {}", e);
        }
        self.genies.set(vec![]);
        self.subscription.set(None);
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth_status.get() == AuthStatus::Authenticated
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
