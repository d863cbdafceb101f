//! Session handling and route gating
//!
//! # Module Structure
//!
//! - [`auth::session`](crate::auth::session) - Session token, persisted
//!   profile, and the shared [`SessionContext`](session::SessionContext)
//! - [`auth::gate`](crate::auth::gate) - Render/redirect decisions per route
//!
//! # Usage
//!
//! ```ignore
//! use genie::auth::{gate::RouteGate, session::{MemorySessionStore, SessionContext}};
//! use std::sync::Arc;
//!
//! let session = SessionContext::load(Arc::new(MemorySessionStore::new()));
//! let decision = RouteGate::default().evaluate("/billing", session.status());
//! ```
//!
//! The token is the only authentication signal. It is not validated
//! client-side; the backend rejects expired or forged tokens on the next
//! authenticated call.

/// Render/redirect decisions for protected and public-only routes.
pub mod gate;
/// Session token, user profile and the injected session context.
pub mod session;
