//! Hosted checkout gateway adapter surface
//!
//! The hosted widget reports through loosely typed callbacks (`handler`, the
//! `payment.failed` event, `modal.ondismiss`). Adapters translate all of them
//! into a single [`GatewayOutcome`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Options passed to the hosted checkout widget, minus the callbacks the
/// adapter attaches itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutOptions {
    pub key: String,
    pub amount: u64,
    pub currency: String,
    pub order_id: String,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub prefill: Prefill,
    #[serde(default)]
    pub theme: Theme,
}

/// Customer details pre-filled in the widget
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prefill {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub color: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            color: "#6366f1".to_string(),
        }
    }
}

/// Payload of the widget's success `handler`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentReceipt {
    pub razorpay_order_id: String,
    pub razorpay_payment_id: String,
    pub razorpay_signature: String,
}

/// Payload of the widget's `payment.failed` event
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GatewayFailure {
    #[serde(default)]
    pub error: GatewayFailureDetail,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GatewayFailureDetail {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
}

pub const FALLBACK_FAILURE_DESCRIPTION: &str = "Payment failed";

impl GatewayFailure {
    /// The gateway's own description, or a generic one when it sent none.
    pub fn description(&self) -> String {
        self.error
            .description
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or(FALLBACK_FAILURE_DESCRIPTION)
            .to_string()
    }

    /// Outcome for a raw `payment.failed` payload; undecodable payloads still
    /// count as failures.
    pub fn outcome_from_json(raw: &str) -> GatewayOutcome {
        let failure: GatewayFailure = serde_json::from_str(raw).unwrap_or_default();
        GatewayOutcome::Failure {
            description: failure.description(),
        }
    }
}

/// How a checkout attempt in the widget ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayOutcome {
    Success(PaymentReceipt),
    Failure { description: String },
    /// The customer closed the widget without paying
    Cancelled,
}

/// A hosted checkout widget.
#[async_trait(?Send)]
pub trait CheckoutGateway {
    /// Whether the gateway's script has loaded and its entry point exists.
    fn is_loaded(&self) -> bool;

    /// Opens the widget and resolves once the customer paid, the payment
    /// failed, or the widget was dismissed.
    async fn open(&self, options: CheckoutOptions) -> GatewayOutcome;
}
