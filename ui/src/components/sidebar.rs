//! Sidebar navigation

use genie::routes;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

const NAV_ITEMS: [(&str, &str, &str); 5] = [
    (routes::DASHBOARD, "📊", "Dashboard"),
    (routes::GENIES, "🧞", "Genies"),
    (routes::ANALYTICS, "📈", "Analytics"),
    (routes::BILLING, "💳", "Billing"),
    (routes::SETTINGS, "⚙️", "Settings"),
];

/// Sidebar with the console sections
#[component]
pub fn Sidebar(
    /// Whether sidebar is open (mobile)
    is_open: RwSignal<bool>,
) -> impl IntoView {
    let location = use_location();

    view! {
        <Show when=move || is_open.get()>
            <div
                class="fixed inset-0 bg-black/60 backdrop-blur-sm z-30 lg:hidden animate-fade-in"
                on:click=move |_| is_open.set(false)
            ></div>
        </Show>

        <aside class=move || format!(
            "sidebar fixed lg:relative inset-y-0 left-0 z-40 w-64
             flex flex-col transform transition-transform duration-300 lg:translate-x-0 {}",
            if is_open.get() { "translate-x-0" } else { "-translate-x-full" }
        )>
            <nav class="flex-1 overflow-y-auto p-4 space-y-1">
                {NAV_ITEMS
                    .into_iter()
                    .map(|(href, emoji, label)| {
                        let is_active = move || location.pathname.with(|path| routes::is_active(path, href));
                        view! {
                            <a
                                href=href
                                on:click=move |_| is_open.set(false)
                                class=move || format!(
                                    "sidebar-item relative w-full transition-all duration-150 {}",
                                    if is_active() { "sidebar-item-active" } else { "" }
                                )
                                aria-current=move || is_active().then_some("page")
                            >
                                <span class="text-lg">{emoji}</span>
                                <span class="text-sm font-medium">{label}</span>
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>

            <div class="p-4 border-t border-[var(--border-default)]">
                <div class="text-xs text-[var(--text-muted)] text-center">
                    {concat!("Genie Console v", env!("CARGO_PKG_VERSION"))}
                </div>
            </div>
        </aside>
    }
}
