//! Route access gate
//!
//! Decides per navigation whether to render the requested view, show a
//! loading placeholder, or redirect. The decision is pure: it only looks at
//! the path and the current [`AuthStatus`], never the network.

use crate::auth::session::SessionToken;
use crate::routes::{self, RouteAccess, RouteTable};
use tracing::debug;

/// Authentication status as seen by the gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStatus {
    /// Session not loaded yet
    Unknown,
    Authenticated,
    Unauthenticated,
}

impl AuthStatus {
    pub fn from_token(token: Option<&SessionToken>) -> Self {
        match token {
            Some(_) => AuthStatus::Authenticated,
            None => AuthStatus::Unauthenticated,
        }
    }

    /// Status for a raw stored value, treating placeholders as absent.
    pub fn from_raw(raw: Option<&str>) -> Self {
        Self::from_token(SessionToken::parse(raw).as_ref())
    }
}

/// What the view layer should do for the current navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    Loading,
    Render,
    Redirect {
        to: String,
        /// Replace the current history entry instead of pushing
        replace: bool,
    },
}

/// Gate configuration: where to send visitors that may not stay.
#[derive(Debug, Clone)]
pub struct RouteGate {
    login_path: String,
    home_path: String,
    routes: RouteTable,
}

impl Default for RouteGate {
    fn default() -> Self {
        Self::new(routes::LOGIN, routes::DASHBOARD)
    }
}

impl RouteGate {
    pub fn new(login_path: impl Into<String>, home_path: impl Into<String>) -> Self {
        Self {
            login_path: login_path.into(),
            home_path: home_path.into(),
            routes: routes::console_routes(),
        }
    }

    pub fn with_routes(mut self, routes: RouteTable) -> Self {
        self.routes = routes;
        self
    }

    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    pub fn home_path(&self) -> &str {
        &self.home_path
    }

    /// Decision for a view with a known access rule.
    pub fn decide(&self, access: RouteAccess, status: AuthStatus) -> GateDecision {
        match (access, status) {
            (RouteAccess::Open, _) => GateDecision::Render,
            (_, AuthStatus::Unknown) => GateDecision::Loading,
            (RouteAccess::Protected, AuthStatus::Authenticated) => GateDecision::Render,
            (RouteAccess::Protected, AuthStatus::Unauthenticated) => GateDecision::Redirect {
                to: self.login_path.clone(),
                replace: true,
            },
            (RouteAccess::PublicOnly, AuthStatus::Authenticated) => GateDecision::Redirect {
                to: self.home_path.clone(),
                replace: true,
            },
            (RouteAccess::PublicOnly, AuthStatus::Unauthenticated) => GateDecision::Render,
        }
    }

    /// Decision for `path`, looking its access rule up in the route table.
    pub fn evaluate(&self, path: &str, status: AuthStatus) -> GateDecision {
        let access = self.routes.access_for(path);
        let decision = self.decide(access, status);
        debug!(path, ?access, ?status, ?decision, "Route gate evaluated");
        decision
    }
}
