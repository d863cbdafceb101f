//! Analytics

use super::dashboard::MetricCard;
use crate::components::ConsoleLayout;
use crate::types::{METRICS, WEEKLY_CONVERSATIONS};
use leptos::prelude::*;

#[component]
pub fn AnalyticsPage() -> impl IntoView {
    let peak = WEEKLY_CONVERSATIONS
        .iter()
        .map(|(_, count)| *count)
        .max()
        .unwrap_or(1)
        .max(1);

    view! {
        <ConsoleLayout title="Analytics" subtitle="Last 7 days across all genies">
            <div class="grid sm:grid-cols-2 lg:grid-cols-4 gap-4 mb-8">
                {METRICS.into_iter().map(|metric| view! { <MetricCard metric=metric /> }).collect::<Vec<_>>()}
            </div>

            <div class="card p-6">
                <h2 class="text-lg font-semibold mb-6">"Conversations per day"</h2>
                <div class="flex items-end gap-3 h-48">
                    {WEEKLY_CONVERSATIONS
                        .into_iter()
                        .map(|(day, count)| {
                            let height = format!("height: {}%", count * 100 / peak);
                            view! {
                                <div class="flex-1 flex flex-col items-center gap-2 h-full justify-end">
                                    <div class="w-full rounded-t bg-indigo-500/80" style=height title=count.to_string()></div>
                                    <span class="text-xs text-[var(--text-muted)]">{day}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </ConsoleLayout>
    }
}
