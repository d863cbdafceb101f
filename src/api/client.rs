use crate::api::{endpoint, SubscriptionApi, ORDER_PATH, VERIFY_PATH};
use crate::auth::session::SessionContext;
use crate::types::{
    ApiErrorBody, ApiResponse, AppError, CreateOrderRequest, PaymentOrder, Result,
    VerifyPaymentData, VerifyPaymentRequest,
};
use crate::utils::config::ApiConfig;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, warn};

/// Subscription API over HTTP.
///
/// The bearer token is read from the session on every call, so a sign-out
/// in another part of the app takes effect on the next request.
pub struct HttpSubscriptionApi {
    client: reqwest::Client,
    base_url: String,
    session: SessionContext,
}

impl HttpSubscriptionApi {
    pub fn new(config: &ApiConfig, session: SessionContext) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            session,
        })
    }

    async fn post<T, R>(&self, path: &str, body: &T) -> Result<R>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = endpoint(&self.base_url, path);
        let mut req = self.client.post(&url).json(body);
        if let Some(token) = self.session.token() {
            req = req.header(reqwest::header::AUTHORIZATION, token.bearer());
        }

        debug!(%url, "POST");
        let resp = req
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp
                .json::<ApiErrorBody>()
                .await
                .ok()
                .and_then(ApiErrorBody::into_message)
                .unwrap_or_else(|| format!("Request failed with status {}", status));
            warn!(%url, status = status.as_u16(), "Request failed: {}", message);
            return Err(AppError::Api {
                status: Some(status.as_u16()),
                message,
            });
        }

        resp.json::<R>()
            .await
            .map_err(|e| AppError::InvalidResponse(format!("Failed to parse response: {}", e)))
    }
}

#[async_trait(?Send)]
impl SubscriptionApi for HttpSubscriptionApi {
    async fn create_order(&self, plan_id: &str) -> Result<PaymentOrder> {
        let body = CreateOrderRequest {
            plan_id: plan_id.to_string(),
        };
        let resp: ApiResponse<PaymentOrder> = self.post(ORDER_PATH, &body).await?;
        resp.into_data()
    }

    async fn verify_payment(&self, request: &VerifyPaymentRequest) -> Result<VerifyPaymentData> {
        let resp: ApiResponse<VerifyPaymentData> = self.post(VERIFY_PATH, request).await?;
        resp.into_data()
    }
}
