//! Genie list

use crate::api::load_genies;
use crate::components::ConsoleLayout;
use crate::state::AppState;
use leptos::prelude::*;

#[component]
pub fn GeniesPage() -> impl IntoView {
    let state = expect_context::<AppState>();

    let state_for_effect = state.clone();
    Effect::new(move |_| {
        load_genies(state_for_effect.clone());
    });

    let genies = state.genies;

    view! {
        <ConsoleLayout title="Genies" subtitle="Chatbots deployed from this account">
            <Show
                when=move || !genies.get().is_empty()
                fallback=|| view! {
                    <div class="card p-10 text-center text-[var(--text-secondary)]">
                        "No genies yet. Create one to get started."
                    </div>
                }
            >
                <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-4">
                    <For
                        each=move || genies.get()
                        key=|genie| genie.id.clone()
                        children=|genie| {
                            let updated = genie
                                .updated_at
                                .map(|at| format!("Updated {}", at.format("%b %e, %Y")))
                                .unwrap_or_default();
                            view! {
                                <div class="card p-5">
                                    <div class="flex items-center justify-between mb-2">
                                        <h3 class="font-semibold">{genie.name}</h3>
                                        <span class=if genie.is_active { "badge badge-success" } else { "badge" }>
                                            {if genie.is_active { "Active" } else { "Paused" }}
                                        </span>
                                    </div>
                                    <p class="text-sm text-[var(--text-secondary)] mb-3">{genie.description}</p>
                                    <div class="flex justify-between text-xs text-[var(--text-muted)]">
                                        <span>{format!("{} conversations", genie.conversations)}</span>
                                        <span>{updated}</span>
                                    </div>
                                </div>
                            }
                        }
                    />
                </div>
            </Show>
        </ConsoleLayout>
    }
}
