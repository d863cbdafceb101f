//! Login/Register page

use crate::api::{google_oauth_url, login, register};
use crate::components::Header;
use crate::state::AppState;
use genie::routes;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Login/Register page
///
/// Only reachable without a session. After a successful sign-in the
/// public-only guard around this page sends the user on to the home view.
#[component]
pub fn LoginPage(
    /// Start in registration mode
    #[prop(optional)]
    register_mode: bool,
) -> impl IntoView {
    let state = expect_context::<AppState>();

    let is_register = RwSignal::new(register_mode);
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let is_loading = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);

    let google_url = google_oauth_url(&state.config.api.base_url);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get();
        let password_val = password.get();
        let name_val = name.get();
        let is_reg = is_register.get();
        let state = state.clone();

        spawn_local(async move {
            is_loading.set(true);
            error.set(None);

            let base_url = state.config.api.base_url.clone();
            let result = if is_reg {
                register(&base_url, &name_val, &email_val, &password_val).await
            } else {
                login(&base_url, &email_val, &password_val).await
            };

            is_loading.set(false);

            match result.and_then(|auth| state.sign_in(&auth.token, auth.user)) {
                Ok(()) => tracing::info!("Signed in"),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <div class="min-h-screen flex flex-col bg-[var(--bg-primary)]">
            <Header />

            <main class="auth-container flex-1">
                <div class="w-full max-w-md px-4">
                    <div class="auth-card">
                        <div class="auth-header">
                            <div class="auth-logo text-5xl">"🧞"</div>
                            <h1 class="auth-title text-gradient">
                                {move || if is_register.get() { "Create Account" } else { "Welcome Back" }}
                            </h1>
                            <p class="auth-subtitle">
                                {move || if is_register.get() {
                                    "Sign up to build your first genie"
                                } else {
                                    "Sign in to your console"
                                }}
                            </p>
                        </div>

                        <Show when=move || error.get().is_some()>
                            <div class="mb-6 p-4 bg-[var(--accent-error)]/10 border border-[var(--accent-error)]/50
                                        rounded-[var(--radius-md)] text-[var(--accent-error)] text-sm animate-fade-in">
                                {move || error.get().unwrap_or_default()}
                            </div>
                        </Show>

                        <form on:submit=on_submit class="auth-form">
                            <Show when=move || is_register.get()>
                                <div class="auth-input-group animate-fade-in-down">
                                    <label class="auth-label">"Name"</label>
                                    <input
                                        type="text"
                                        prop:value=move || name.get()
                                        on:input=move |ev| name.set(event_target_value(&ev))
                                        placeholder="Your name"
                                        required=true
                                        class="input"
                                    />
                                </div>
                            </Show>

                            <div class="auth-input-group">
                                <label class="auth-label">"Email"</label>
                                <input
                                    type="email"
                                    prop:value=move || email.get()
                                    on:input=move |ev| email.set(event_target_value(&ev))
                                    placeholder="you@example.com"
                                    required=true
                                    class="input"
                                />
                            </div>

                            <div class="auth-input-group">
                                <label class="auth-label">"Password"</label>
                                <input
                                    type="password"
                                    prop:value=move || password.get()
                                    on:input=move |ev| password.set(event_target_value(&ev))
                                    placeholder="••••••••"
                                    required=true
                                    minlength="8"
                                    class="input"
                                />
                            </div>

                            <button
                                type="submit"
                                disabled=move || is_loading.get()
                                class="btn btn-primary w-full py-3"
                            >
                                <Show when=move || is_loading.get()>
                                    <div class="loading-spinner"></div>
                                </Show>
                                {move || if is_register.get() { "Create Account" } else { "Sign In" }}
                            </button>
                        </form>

                        <div class="my-6 flex items-center gap-3 text-xs text-[var(--text-muted)]">
                            <span class="flex-1 border-t border-[var(--border-default)]"></span>
                            "or"
                            <span class="flex-1 border-t border-[var(--border-default)]"></span>
                        </div>

                        <a href=google_url rel="external" class="btn btn-secondary w-full py-3">
                            "Continue with Google"
                        </a>

                        <div class="auth-footer">
                            {move || if is_register.get() {
                                "Already have an account? "
                            } else {
                                "Don't have an account? "
                            }}
                            <a
                                href=move || if is_register.get() { routes::LOGIN } else { routes::REGISTER }
                                class="auth-link"
                            >
                                {move || if is_register.get() { "Sign in" } else { "Sign up" }}
                            </a>
                        </div>
                    </div>
                </div>
            </main>
        </div>
    }
}
