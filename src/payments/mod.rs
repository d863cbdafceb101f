//! Subscription payments
//!
//! - [`payments::gateway`](crate::payments::gateway) - Typed surface of the
//!   hosted checkout widget
//! - [`payments::workflow`](crate::payments::workflow) - Order, widget and
//!   verification orchestration

/// Hosted checkout widget adapter trait and payloads.
pub mod gateway;
/// Checkout state machine.
pub mod workflow;

pub use gateway::{CheckoutGateway, CheckoutOptions, GatewayOutcome, PaymentReceipt};
pub use workflow::{CheckoutError, CheckoutState, CheckoutWorkflow, Notifier, PlanSelection};
