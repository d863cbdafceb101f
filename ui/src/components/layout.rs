//! Dashboard shell shared by the signed-in pages

use super::{Header, Sidebar};
use leptos::prelude::*;

#[component]
pub fn ConsoleLayout(
    /// Page heading
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let sidebar_open = RwSignal::new(false);

    view! {
        <div class="min-h-screen flex flex-col bg-[var(--bg-primary)]">
            <Header sidebar_open=sidebar_open />
            <div class="flex flex-1 overflow-hidden">
                <Sidebar is_open=sidebar_open />
                <main class="flex-1 overflow-y-auto p-6 lg:p-8">
                    <div class="max-w-6xl mx-auto">
                        <div class="mb-8">
                            <h1 class="text-3xl font-bold">{title}</h1>
                            {subtitle.map(|s| view! { <p class="text-[var(--text-secondary)] mt-1">{s}</p> })}
                        </div>
                        {children()}
                    </div>
                </main>
            </div>
        </div>
    }
}
