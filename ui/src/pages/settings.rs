//! Account settings

use crate::components::ConsoleLayout;
use crate::state::AppState;
use genie::routes;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();
    let user = state.user;

    let sign_out = move |_| {
        state.sign_out();
        navigate(routes::LOGIN, Default::default());
    };

    view! {
        <ConsoleLayout title="Settings">
            <div class="card p-6 max-w-xl">
                <h2 class="text-lg font-semibold mb-4">"Profile"</h2>
                {move || match user.get() {
                    Some(profile) => view! {
                        <div class="flex items-center gap-4">
                            {match profile.avatar {
                                Some(src) => view! { <img src=src alt="" class="w-14 h-14 rounded-full" /> }.into_any(),
                                None => view! {
                                    <div class="w-14 h-14 rounded-full bg-indigo-600 flex items-center justify-center text-xl font-semibold">
                                        {profile.name.chars().next().map(|c| c.to_uppercase().to_string()).unwrap_or_default()}
                                    </div>
                                }.into_any(),
                            }}
                            <div>
                                <p class="font-medium">{profile.name}</p>
                                <p class="text-sm text-[var(--text-secondary)]">{profile.email}</p>
                            </div>
                        </div>
                    }.into_any(),
                    None => view! {
                        <p class="text-sm text-[var(--text-secondary)]">"Profile details are not available for this session."</p>
                    }.into_any(),
                }}

                <div class="mt-8 pt-6 border-t border-[var(--border-default)]">
                    <button class="btn btn-ghost text-[var(--accent-error)]" on:click=sign_out>
                        "Sign out"
                    </button>
                </div>
            </div>
        </ConsoleLayout>
    }
}
