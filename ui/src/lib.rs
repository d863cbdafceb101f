//! Genie Console UI - Leptos frontend
//!
//! Dashboard for managing genies, reading analytics and buying a
//! subscription. Access rules and the checkout flow live in the `genie`
//! core crate; this crate supplies the browser side (local storage,
//! `fetch`, the hosted checkout script) and the views.

pub mod api;
pub mod components;
pub mod pages;
pub mod razorpay;
pub mod state;
pub mod storage;
pub mod types;

use leptos::ev;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use components::{ProtectedRoute, PublicOnlyRoute, Toasts};
use pages::{
    analytics::AnalyticsPage, billing::BillingPage, dashboard::DashboardPage,
    genies::GeniesPage, home::HomePage, login::LoginPage, oauth_callback::OAuthCallbackPage,
    settings::SettingsPage,
};
use state::AppState;

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let app_state = AppState::new();
    provide_context(app_state.clone());

    // Sign-in/out in another tab shows up as a storage event here
    let _storage_listener = window_event_listener(ev::storage, move |_| {
        app_state.refresh_session();
    });

    view! {
        <Title text="Genie Console" />
        <Router>
            <main class="min-h-screen bg-slate-900 text-slate-100">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route
                        path=path!("/login")
                        view=|| view! { <PublicOnlyRoute><LoginPage /></PublicOnlyRoute> }
                    />
                    <Route
                        path=path!("/register")
                        view=|| view! { <PublicOnlyRoute><LoginPage register_mode=true /></PublicOnlyRoute> }
                    />
                    <Route path=path!("/auth/callback") view=OAuthCallbackPage />
                    <Route
                        path=path!("/dashboard")
                        view=|| view! { <ProtectedRoute><DashboardPage /></ProtectedRoute> }
                    />
                    <Route
                        path=path!("/genies")
                        view=|| view! { <ProtectedRoute><GeniesPage /></ProtectedRoute> }
                    />
                    <Route
                        path=path!("/analytics")
                        view=|| view! { <ProtectedRoute><AnalyticsPage /></ProtectedRoute> }
                    />
                    <Route
                        path=path!("/billing")
                        view=|| view! { <ProtectedRoute><BillingPage /></ProtectedRoute> }
                    />
                    <Route
                        path=path!("/settings")
                        view=|| view! { <ProtectedRoute><SettingsPage /></ProtectedRoute> }
                    />
                </Routes>
            </main>
            <Toasts />
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-slate-500 mb-4">"404"</h1>
                <p class="text-xl text-slate-400 mb-8">"Page not found"</p>
                <a
                    href=genie::routes::HOME
                    class="px-6 py-3 bg-indigo-600 hover:bg-indigo-700 rounded-lg font-medium transition-colors"
                >
                    "Go Home"
                </a>
            </div>
        </div>
    }
}
