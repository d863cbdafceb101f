//! Route guards
//!
//! Wrap a page in [`ProtectedRoute`] or [`PublicOnlyRoute`]; the session is
//! re-read on every navigation so a logout in another tab is honoured the
//! next time the user moves around.

use crate::components::loading::LoadingOverlay;
use crate::state::AppState;
use genie::auth::gate::GateDecision;
use genie::routes::RouteAccess;
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;

/// Only rendered with a session; anonymous visitors go to the login page.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    view! { <Guard access=RouteAccess::Protected children=children /> }
}

/// Only rendered without a session; signed-in users go to the home view.
#[component]
pub fn PublicOnlyRoute(children: ChildrenFn) -> impl IntoView {
    view! { <Guard access=RouteAccess::PublicOnly children=children /> }
}

#[component]
fn Guard(access: RouteAccess, children: ChildrenFn) -> impl IntoView {
    let state = expect_context::<AppState>();
    let location = use_location();
    let navigate = use_navigate();

    let state_for_refresh = state.clone();
    Effect::new(move |_| {
        location.pathname.track();
        state_for_refresh.refresh_session();
    });

    let gate = state.gate.clone();
    let auth_status = state.auth_status;
    let decision = Memo::new(move |_| gate.decide(access, auth_status.get()));

    Effect::new(move |_| {
        if let GateDecision::Redirect { to, replace } = decision.get() {
            tracing::debug!(to = %to, "Route guard redirecting");
            navigate(
                &to,
                NavigateOptions {
                    replace,
                    ..Default::default()
                },
            );
        }
    });

    move || match decision.get() {
        GateDecision::Loading => view! { <LoadingOverlay message="Checking your session..." /> }.into_any(),
        GateDecision::Render => children().into_any(),
        GateDecision::Redirect { .. } => ().into_any(),
    }
}
