//! Subscribe button driving the checkout workflow

use crate::api::GlooSubscriptionApi;
use crate::components::loading::LoadingSpinner;
use crate::components::toast::ToastNotifier;
use crate::razorpay::RazorpayGateway;
use crate::state::AppState;
use genie::payments::gateway::Prefill;
use genie::payments::workflow::{Branding, CheckoutState, CheckoutWorkflow, PlanSelection};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;

#[component]
pub fn CheckoutButton(
    plan_id: &'static str,
    plan_name: &'static str,
    /// Whether the checkout script has finished loading
    script_loaded: ReadSignal<bool>,
    #[prop(default = false)] highlighted: bool,
) -> impl IntoView {
    let state = expect_context::<AppState>();
    let checkout_state = RwSignal::new(CheckoutState::Idle);
    let busy = Memo::new(move |_| checkout_state.get().is_busy());

    let on_click = move |_| {
        if busy.get_untracked() {
            return;
        }

        let session = state.session.clone();
        let api = GlooSubscriptionApi::new(state.config.api.base_url.clone(), session);
        let prefill = state
            .user
            .get_untracked()
            .map(|user| Prefill {
                name: Some(user.name),
                email: Some(user.email),
                contact: None,
            })
            .unwrap_or_default();
        let subscription = state.subscription;

        let workflow = CheckoutWorkflow::new(
            Rc::new(api),
            Rc::new(RazorpayGateway),
            Rc::new(ToastNotifier::new(state.toasts)),
        )
        .with_plan(PlanSelection::new(plan_id, plan_name))
        .with_branding(Branding::from(&state.config.checkout))
        .with_prefill(prefill)
        .on_state_change(move |next| checkout_state.set(next))
        .on_success(move |active| subscription.set(Some(active.clone())));

        spawn_local(async move {
            // Outcome is already surfaced through toasts and callbacks
            let _ = workflow.initiate(None).await;
        });
    };

    let class = if highlighted {
        "btn btn-primary w-full py-3"
    } else {
        "btn btn-secondary w-full py-3"
    };

    view! {
        <button
            class=class
            on:click=on_click
            disabled=move || busy.get() || !script_loaded.get()
        >
            <Show when=move || busy.get()>
                <LoadingSpinner size="w-4 h-4" />
            </Show>
            {move || match checkout_state.get() {
                CheckoutState::CreatingOrder => "Preparing order...".to_string(),
                CheckoutState::AwaitingGatewayResult => "Complete payment...".to_string(),
                CheckoutState::Verifying => "Verifying...".to_string(),
                _ if !script_loaded.get() => "Loading checkout...".to_string(),
                _ => format!("Choose {}", plan_name),
            }}
        </button>
    }
}
