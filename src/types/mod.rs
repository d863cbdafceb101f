use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ============= API Request/Response Types =============

/// Envelope every backend endpoint wraps its payload in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Unwraps the payload, treating `success: false` or a missing `data`
    /// field as an API error.
    pub fn into_data(self) -> Result<T> {
        if !self.success {
            return Err(AppError::Api {
                status: None,
                message: self
                    .message
                    .unwrap_or_else(|| "request was not successful".to_string()),
            });
        }

        self.data.ok_or_else(|| {
            AppError::InvalidResponse("response is missing the `data` field".to_string())
        })
    }
}

/// Body of `POST /subscriptions/order`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub plan_id: String,
}

/// Order issued by the backend for a single checkout attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentOrder {
    pub order_id: String,
    /// Amount in the currency's minor unit (paise for INR)
    pub amount: u64,
    pub currency: String,
    pub razorpay_key_id: String,
}

/// Body of `POST /subscriptions/verify`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyPaymentRequest {
    pub razorpay_order_id: String,
    pub razorpay_payment_id: String,
    pub razorpay_signature: String,
    #[serde(rename = "planId")]
    pub plan_id: String,
}

/// `data` payload of a verification response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifyPaymentData {
    #[serde(default)]
    pub subscription: Option<Subscription>,
}

/// Subscription record returned by a successful verification.
///
/// The backend owns this shape. The record is kept as sent and handed to
/// callers unchanged; the accessors only read well-known keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Subscription(Map<String, Value>);

impl Subscription {
    /// Record identifier from `id` or `_id`, numbers rendered as text.
    pub fn id(&self) -> Option<String> {
        self.text("id").or_else(|| self.text("_id"))
    }

    pub fn plan_id(&self) -> Option<String> {
        self.text("planId")
    }

    pub fn status(&self) -> Option<String> {
        self.text("status")
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }

    fn text(&self, key: &str) -> Option<String> {
        match self.0.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

impl From<Map<String, Value>> for Subscription {
    fn from(record: Map<String, Value>) -> Self {
        Self(record)
    }
}

/// Error body returned by the backend on non-2xx responses
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiErrorBody {
    pub fn into_message(self) -> Option<String> {
        self.message.or(self.error)
    }
}

// ============= Error Types =============

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error: {message}")]
    Api {
        status: Option<u16>,
        message: String,
    },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_order_response_decodes_camel_case() {
        let resp: ApiResponse<PaymentOrder> = serde_json::from_value(json!({
            "success": true,
            "data": {
                "orderId": "o1",
                "amount": 9900,
                "currency": "INR",
                "razorpayKeyId": "k1"
            }
        }))
        .unwrap();

        let order = resp.into_data().unwrap();
        assert_eq!(order.order_id, "o1");
        assert_eq!(order.amount, 9900);
        assert_eq!(order.razorpay_key_id, "k1");
    }

    #[test]
    fn test_unsuccessful_envelope_is_api_error() {
        let resp: ApiResponse<PaymentOrder> = serde_json::from_value(json!({
            "success": false,
            "message": "Plan not found"
        }))
        .unwrap();

        match resp.into_data() {
            Err(AppError::Api { message, .. }) => assert_eq!(message, "Plan not found"),
            other => panic!("Expected API error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_data_is_invalid_response() {
        let resp: ApiResponse<PaymentOrder> =
            serde_json::from_value(json!({ "success": true })).unwrap();

        assert!(matches!(resp.into_data(), Err(AppError::InvalidResponse(_))));
    }

    #[test]
    fn test_verify_request_wire_names() {
        let body = VerifyPaymentRequest {
            razorpay_order_id: "o1".to_string(),
            razorpay_payment_id: "p1".to_string(),
            razorpay_signature: "s1".to_string(),
            plan_id: "pro-monthly".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "razorpay_order_id": "o1",
                "razorpay_payment_id": "p1",
                "razorpay_signature": "s1",
                "planId": "pro-monthly"
            })
        );
    }

    #[test]
    fn test_subscription_keeps_unknown_fields() {
        let sub: Subscription = serde_json::from_value(json!({
            "id": "sub1",
            "status": "active",
            "currentPeriodEnd": "2026-11-17"
        }))
        .unwrap();

        assert_eq!(sub.id().as_deref(), Some("sub1"));
        assert_eq!(sub.status().as_deref(), Some("active"));
        assert_eq!(sub.get("currentPeriodEnd"), Some(&json!("2026-11-17")));
    }

    #[test]
    fn test_subscription_accepts_backend_specific_shapes() {
        let mongo: Subscription =
            serde_json::from_value(json!({ "_id": "sub1", "status": "active" })).unwrap();
        assert_eq!(mongo.id().as_deref(), Some("sub1"));

        let numeric: Subscription =
            serde_json::from_value(json!({ "id": 42, "planId": 7 })).unwrap();
        assert_eq!(numeric.id().as_deref(), Some("42"));
        assert_eq!(numeric.plan_id().as_deref(), Some("7"));

        let anonymous: Subscription = serde_json::from_value(json!({ "active": true })).unwrap();
        assert_eq!(anonymous.id(), None);
    }

    #[test]
    fn test_subscription_serializes_unchanged() {
        let record = json!({ "_id": "sub1", "seats": 3, "meta": { "trial": false } });
        let sub: Subscription = serde_json::from_value(record.clone()).unwrap();
        assert_eq!(serde_json::to_value(&sub).unwrap(), record);
    }
}
