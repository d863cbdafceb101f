//! Toast notifications

use crate::state::AppState;
use genie::payments::Notifier;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use uuid::Uuid;

const DISMISS_AFTER_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub message: String,
}

/// Pushes workflow notifications onto the shared toast list
#[derive(Clone, Copy)]
pub struct ToastNotifier {
    toasts: RwSignal<Vec<Toast>>,
}

impl ToastNotifier {
    pub fn new(toasts: RwSignal<Vec<Toast>>) -> Self {
        Self { toasts }
    }

    pub fn push(&self, kind: ToastKind, message: &str) {
        let id = Uuid::new_v4();
        self.toasts.update(|list| {
            list.push(Toast {
                id,
                kind,
                message: message.to_string(),
            })
        });

        let toasts = self.toasts;
        Timeout::new(DISMISS_AFTER_MS, move || {
            let _ = toasts.try_update(|list| list.retain(|t| t.id != id));
        })
        .forget();
    }
}

impl Notifier for ToastNotifier {
    fn success(&self, message: &str) {
        self.push(ToastKind::Success, message);
    }

    fn error(&self, message: &str) {
        self.push(ToastKind::Error, message);
    }

    fn info(&self, message: &str) {
        self.push(ToastKind::Info, message);
    }
}

/// Stack of visible toasts, bottom right
#[component]
pub fn Toasts() -> impl IntoView {
    let state = expect_context::<AppState>();
    let toasts = state.toasts;

    view! {
        <div class="fixed bottom-4 right-4 z-50 flex flex-col gap-2 max-w-sm">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let tone = match toast.kind {
                        ToastKind::Success => "toast toast-success",
                        ToastKind::Error => "toast toast-error",
                        ToastKind::Info => "toast toast-info",
                    };
                    view! {
                        <div class=format!("{} animate-fade-in-up", tone) role="status">
                            <span class="flex-1 text-sm">{toast.message}</span>
                            <button
                                class="text-xs opacity-70 hover:opacity-100"
                                on:click=move |_| toasts.update(|list| list.retain(|t| t.id != id))
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
