//! Landing point of the Google OAuth redirect

use crate::components::{LoadingOverlay, ToastNotifier};
use crate::state::AppState;
use genie::payments::Notifier;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};
use leptos_router::NavigateOptions;

/// Stores the `token`/`user` query parameters as the session, then leaves.
#[component]
pub fn OAuthCallbackPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let query = use_query_map();
    let navigate = use_navigate();

    Effect::new(move |_| {
        let params = query.get_untracked();
        let token = params.get("token");
        let user = params.get("user");

        let result = state
            .session
            .complete_oauth(token.as_deref(), user.as_deref());
        let target = match result {
            Ok(()) => {
                state.refresh_session();
                state.gate.home_path().to_string()
            }
            Err(e) => {
                tracing::warn!("OAuth sign-in failed: {}", e);
                ToastNotifier::new(state.toasts).error("Google sign-in failed. Please try again.");
                state.gate.login_path().to_string()
            }
        };

        // The callback URL carries the token; keep it out of history
        navigate(
            &target,
            NavigateOptions {
                replace: true,
                ..Default::default()
            },
        );
    });

    view! { <LoadingOverlay message="Signing you in..." /> }
}
