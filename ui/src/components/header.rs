//! Header component

use crate::state::AppState;
use genie::routes;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// Top bar: brand, current user and sign-in/out
#[component]
pub fn Header(
    /// Toggles the sidebar on small screens
    #[prop(optional)]
    sidebar_open: Option<RwSignal<bool>>,
) -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();
    let is_auth = Signal::derive({
        let state = state.clone();
        move || state.is_authenticated()
    });
    let user = state.user;

    view! {
        <header class="header h-16 sticky top-0 z-40">
            <div class="h-full px-4 flex items-center justify-between gap-4">
                <div class="flex items-center gap-3">
                    {sidebar_open.map(|open| view! {
                        <button
                            class="btn btn-ghost lg:hidden"
                            aria-label="Toggle navigation"
                            on:click=move |_| open.update(|v| *v = !*v)
                        >
                            "☰"
                        </button>
                    })}
                    <a href=routes::HOME class="logo hover:opacity-80 transition-opacity">
                        <span class="text-2xl">"🧞"</span>
                        <h1 class="text-xl font-bold text-gradient">"Genie"</h1>
                    </a>
                </div>

                <nav class="flex items-center gap-2">
                    {move || {
                        if is_auth.get() {
                            let state = state.clone();
                            let navigate = navigate.clone();
                            view! {
                                <span class="hidden sm:inline text-sm text-[var(--text-secondary)]">
                                    {move || user.get().map(|u| u.name).unwrap_or_default()}
                                </span>
                                <button
                                    on:click=move |_| {
                                        state.sign_out();
                                        navigate(routes::LOGIN, Default::default());
                                    }
                                    class="btn btn-ghost"
                                >
                                    "Sign Out"
                                </button>
                            }
                                .into_any()
                        } else {
                            view! {
                                <a href=routes::LOGIN class="btn btn-ghost">"Sign In"</a>
                                <a href=routes::REGISTER class="btn btn-primary">"Get Started"</a>
                            }
                                .into_any()
                        }
                    }}
                </nav>
            </div>
        </header>
    }
}
