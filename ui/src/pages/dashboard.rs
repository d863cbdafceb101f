//! Dashboard overview

use crate::api::load_genies;
use crate::components::{ConsoleLayout, Skeleton};
use crate::state::AppState;
use crate::types::{Metric, METRICS};
use genie::routes;
use leptos::prelude::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let greeting = {
        let user = state.user;
        move || match user.get() {
            Some(user) => format!("Welcome back, {}", user.name),
            None => "Welcome back".to_string(),
        }
    };

    let state_for_effect = state.clone();
    Effect::new(move |_| {
        load_genies(state_for_effect.clone());
    });

    let genies = state.genies;
    let subscription = state.subscription;

    view! {
        <ConsoleLayout title="Dashboard">
            <p class="text-[var(--text-secondary)] -mt-6 mb-8">{greeting}</p>

            <div class="grid sm:grid-cols-2 lg:grid-cols-4 gap-4 mb-8">
                {METRICS.into_iter().map(|metric| view! { <MetricCard metric=metric /> }).collect::<Vec<_>>()}
            </div>

            <Show when=move || subscription.get().is_some()>
                <div class="card p-4 mb-8 border-emerald-500/50 text-sm">
                    "Your subscription is active. "
                    <a href=routes::BILLING class="auth-link">"Manage billing"</a>
                </div>
            </Show>

            <div class="card p-6">
                <div class="flex items-center justify-between mb-4">
                    <h2 class="text-lg font-semibold">"Recent genies"</h2>
                    <a href=routes::GENIES class="auth-link text-sm">"View all"</a>
                </div>
                {move || {
                    let list = genies.get();
                    if list.is_empty() {
                        view! {
                            <div class="space-y-3">
                                <Skeleton class="h-10 w-full" />
                                <Skeleton class="h-10 w-full" />
                            </div>
                        }
                            .into_any()
                    } else {
                        list.into_iter()
                            .take(5)
                            .map(|genie| view! {
                                <div class="flex items-center justify-between py-3 border-b border-[var(--border-default)] last:border-0">
                                    <span class="font-medium">{genie.name}</span>
                                    <span class="text-sm text-[var(--text-muted)]">
                                        {format!("{} conversations", genie.conversations)}
                                    </span>
                                </div>
                            })
                            .collect::<Vec<_>>()
                            .into_any()
                    }
                }}
            </div>
        </ConsoleLayout>
    }
}

/// Headline number with its week-over-week change
#[component]
pub fn MetricCard(metric: Metric) -> impl IntoView {
    let trend = if metric.trend_up { "text-emerald-400" } else { "text-rose-400" };
    view! {
        <div class="card p-5">
            <p class="text-sm text-[var(--text-muted)]">{metric.label}</p>
            <p class="text-2xl font-bold mt-1">{metric.value}</p>
            <p class=format!("text-xs mt-1 {}", trend)>{metric.change}</p>
        </div>
    }
}
