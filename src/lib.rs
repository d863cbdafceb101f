//! # Genie Console core
//!
//! Platform-neutral logic behind the Genie dashboard: who may see which page,
//! and how a subscription is bought.
//!
//! ## Overview
//!
//! The crate is used in two ways:
//!
//! 1. **By the Leptos frontend** (`ui/`) - built for `wasm32` with
//!    `default-features = false`; the browser supplies local storage, `fetch`
//!    and the hosted checkout widget through the traits defined here.
//! 2. **Natively** - the `native` feature adds a `reqwest` client and `.env`
//!    configuration loading, which the integration tests use.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use genie::auth::gate::{GateDecision, RouteGate};
//! use genie::auth::session::{MemorySessionStore, SessionContext};
//! use std::sync::Arc;
//!
//! let session = SessionContext::load(Arc::new(MemorySessionStore::new()));
//! let gate = RouteGate::default();
//!
//! match gate.evaluate("/billing", session.status()) {
//!     GateDecision::Render => { /* show the page */ }
//!     GateDecision::Redirect { to, replace } => { /* navigate */ }
//!     GateDecision::Loading => { /* spinner */ }
//! }
//! ```
//!
//! ### Checkout
//!
//! ```rust,ignore
//! use genie::payments::{CheckoutWorkflow, PlanSelection};
//! use std::rc::Rc;
//!
//! let workflow = CheckoutWorkflow::new(api, gateway, notifier)
//!     .with_plan(PlanSelection::new("pro-monthly", "Pro Monthly"))
//!     .on_success(|subscription| println!("active: {:?}", subscription.id()));
//!
//! workflow.initiate(None).await?;
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `native` | `reqwest` HTTP client and `.env` loading (default) |
//!
//! ## Modules
//!
//! - [`auth`] - Session context and route gate
//! - [`api`] - Subscription REST endpoints
//! - [`payments`] - Checkout gateway adapter surface and workflow
//! - [`routes`] - Route table and active-path matching
//! - [`types`] - Wire types and error handling
//! - [`utils`] - Configuration

#![warn(rustdoc::missing_crate_level_docs)]

/// Subscription REST endpoints.
pub mod api;
/// Session context and route gate.
pub mod auth;
/// Checkout gateway adapter and workflow.
pub mod payments;
/// Route table and navigation highlighting.
pub mod routes;
/// Core types (requests, responses, errors).
pub mod types;
/// Configuration utilities (TOML, environment).
pub mod utils;

// Re-export commonly used types
pub use api::SubscriptionApi;
pub use auth::gate::{AuthStatus, GateDecision, RouteGate};
pub use auth::session::{SessionContext, SessionStore, SessionToken, UserProfile};
pub use payments::{CheckoutError, CheckoutGateway, CheckoutWorkflow, GatewayOutcome};
pub use types::{AppError, Result};
pub use utils::config::ConsoleConfig;

#[cfg(feature = "native")]
pub use api::client::HttpSubscriptionApi;
