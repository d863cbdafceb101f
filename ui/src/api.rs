//! API client for communicating with the Genie backend

use crate::state::AppState;
use crate::types::*;
use async_trait::async_trait;
use genie::api::{endpoint, SubscriptionApi, ORDER_PATH, VERIFY_PATH};
use genie::auth::session::{SessionContext, SessionToken};
use genie::types::{
    ApiErrorBody, ApiResponse, AppError, CreateOrderRequest, PaymentOrder, Result,
    VerifyPaymentData, VerifyPaymentRequest,
};
use gloo_net::http::{Request, RequestBuilder, Response};
use leptos::prelude::*;
use leptos::task::spawn_local;

fn with_auth(req: RequestBuilder, token: Option<&SessionToken>) -> RequestBuilder {
    match token {
        Some(t) => req.header("Authorization", &t.bearer()),
        None => req,
    }
}

async fn read_json<T: serde::de::DeserializeOwned>(resp: Response) -> Result<T> {
    if !resp.ok() {
        let status = resp.status();
        let message = resp
            .json::<ApiErrorBody>()
            .await
            .ok()
            .and_then(ApiErrorBody::into_message)
            .unwrap_or_else(|| format!("Request failed with status {}", status));
        return Err(AppError::Api {
            status: Some(status),
            message,
        });
    }

    resp.json::<T>()
        .await
        .map_err(|e| AppError::InvalidResponse(format!("Failed to parse response: {}", e)))
}

/// Make authenticated GET requests
pub async fn fetch_with_auth<T: serde::de::DeserializeOwned>(
    url: &str,
    token: Option<&SessionToken>,
) -> Result<T> {
    let resp = with_auth(Request::get(url), token)
        .send()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;

    read_json(resp).await
}

/// POST request with authentication
pub async fn post_with_auth<T, R>(url: &str, body: &T, token: Option<&SessionToken>) -> Result<R>
where
    T: serde::Serialize,
    R: serde::de::DeserializeOwned,
{
    let req = with_auth(
        Request::post(url).header("Content-Type", "application/json"),
        token,
    )
    .json(body)
    .map_err(|e| AppError::InvalidInput(format!("Failed to serialize request: {}", e)))?;

    let resp = req
        .send()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;

    read_json(resp).await
}

/// Login with email and password
pub async fn login(base_url: &str, email: &str, password: &str) -> Result<AuthData> {
    let url = endpoint(base_url, "/auth/login");
    let body = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };
    post_with_auth::<_, ApiResponse<AuthData>>(&url, &body, None)
        .await?
        .into_data()
}

/// Register a new account
pub async fn register(
    base_url: &str,
    name: &str,
    email: &str,
    password: &str,
) -> Result<AuthData> {
    let url = endpoint(base_url, "/auth/register");
    let body = RegisterRequest {
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    };
    post_with_auth::<_, ApiResponse<AuthData>>(&url, &body, None)
        .await?
        .into_data()
}

/// URL that starts the Google OAuth redirect; the backend comes back to
/// `/auth/callback?token=...&user=...`.
pub fn google_oauth_url(base_url: &str) -> String {
    endpoint(base_url, "/auth/google")
}

/// Fetch the signed-in user's genies
pub async fn fetch_genies(base_url: &str, token: &SessionToken) -> Result<Vec<Genie>> {
    let url = endpoint(base_url, "/genies");
    fetch_with_auth::<ApiResponse<Vec<Genie>>>(&url, Some(token))
        .await?
        .into_data()
}

/// Load genies into app state (requires auth)
pub fn load_genies(state: AppState) {
    spawn_local(async move {
        let base = state.config.api.base_url.clone();
        if let Some(token) = state.session.token() {
            match fetch_genies(&base, &token).await {
                Ok(genies) => state.genies.set(genies),
                Err(e) => tracing::error!("Failed to load genies: {}", e),
            }
        }
    });
}

/// Subscription endpoints over `fetch`
pub struct GlooSubscriptionApi {
    base_url: String,
    session: SessionContext,
}

impl GlooSubscriptionApi {
    pub fn new(base_url: impl Into<String>, session: SessionContext) -> Self {
        Self {
            base_url: base_url.into(),
            session,
        }
    }
}

#[async_trait(?Send)]
impl SubscriptionApi for GlooSubscriptionApi {
    async fn create_order(&self, plan_id: &str) -> Result<PaymentOrder> {
        let url = endpoint(&self.base_url, ORDER_PATH);
        let body = CreateOrderRequest {
            plan_id: plan_id.to_string(),
        };
        post_with_auth::<_, ApiResponse<PaymentOrder>>(&url, &body, self.session.token().as_ref())
            .await?
            .into_data()
    }

    async fn verify_payment(&self, request: &VerifyPaymentRequest) -> Result<VerifyPaymentData> {
        let url = endpoint(&self.base_url, VERIFY_PATH);
        post_with_auth::<_, ApiResponse<VerifyPaymentData>>(
            &url,
            request,
            self.session.token().as_ref(),
        )
        .await?
        .into_data()
    }
}
