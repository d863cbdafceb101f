//! Billing: plans and checkout

use crate::components::{CheckoutButton, ConsoleLayout};
use crate::razorpay::use_checkout_script;
use crate::state::AppState;
use crate::types::PLANS;
use leptos::prelude::*;

#[component]
pub fn BillingPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let script_loaded = use_checkout_script(&state.config.checkout.script_url);
    let subscription = state.subscription;

    view! {
        <ConsoleLayout title="Billing" subtitle="Pick the plan that fits your genies">
            {move || subscription.get().map(|active| view! {
                <div class="card p-4 mb-8 border-emerald-500/50">
                    <p class="font-medium">"Subscription active"</p>
                    <p class="text-sm text-[var(--text-secondary)]">
                        {format!(
                            "Reference {}{}",
                            active.id().unwrap_or_else(|| "pending".to_string()),
                            active.plan_id().map(|plan| format!(" · {}", plan)).unwrap_or_default(),
                        )}
                    </p>
                </div>
            })}

            <div class="grid md:grid-cols-3 gap-6">
                {PLANS
                    .into_iter()
                    .map(|plan| view! {
                        <div class=if plan.highlighted {
                            "card p-6 flex flex-col border-indigo-500 shadow-lg shadow-indigo-500/10"
                        } else {
                            "card p-6 flex flex-col"
                        }>
                            <Show when=move || plan.highlighted>
                                <span class="badge badge-primary self-start mb-3">"Most popular"</span>
                            </Show>
                            <h2 class="text-xl font-semibold">{plan.name}</h2>
                            <p class="text-3xl font-bold mt-2 mb-6">
                                {plan.price}
                                <span class="text-base font-normal text-[var(--text-muted)]">{plan.period}</span>
                            </p>
                            <ul class="space-y-2 mb-8 flex-1 text-sm text-[var(--text-secondary)]">
                                {plan.features.iter().map(|feature| view! { <li>"✓ " {*feature}</li> }).collect::<Vec<_>>()}
                            </ul>
                            <CheckoutButton
                                plan_id=plan.id
                                plan_name=plan.name
                                script_loaded=script_loaded
                                highlighted=plan.highlighted
                            />
                        </div>
                    })
                    .collect::<Vec<_>>()}
            </div>
        </ConsoleLayout>
    }
}
