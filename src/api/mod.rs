//! Backend REST API
//!
//! Only the subscription endpoints the checkout workflow needs are modelled
//! here:
//!
//! - `POST /subscriptions/order` - Create a payment order for a plan
//! - `POST /subscriptions/verify` - Verify a gateway payment and activate the
//!   subscription
//!
//! Authenticated calls carry the session token:
//! ```text
//! Authorization: Bearer <token>
//! ```
//! When no session exists the header is omitted and the backend decides.

/// `reqwest` implementation of [`SubscriptionApi`].
#[cfg(feature = "native")]
pub mod client;

use crate::types::{PaymentOrder, Result, VerifyPaymentData, VerifyPaymentRequest};
use async_trait::async_trait;

pub const ORDER_PATH: &str = "/subscriptions/order";
pub const VERIFY_PATH: &str = "/subscriptions/verify";

/// Subscription endpoints used during checkout.
///
/// Futures are not required to be `Send` so browser implementations built on
/// `fetch` can implement the trait.
#[cfg_attr(test, mockall::automock)]
#[async_trait(?Send)]
pub trait SubscriptionApi {
    /// Creates a payment order for `plan_id`.
    async fn create_order(&self, plan_id: &str) -> Result<PaymentOrder>;

    /// Confirms a gateway payment with the backend.
    async fn verify_payment(&self, request: &VerifyPaymentRequest) -> Result<VerifyPaymentData>;
}

/// Joins `base` and `path` without doubling or dropping the separator.
pub fn endpoint(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
