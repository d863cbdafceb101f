//! Test doubles for the browser-side collaborators of the checkout workflow.
//!
//! The REST API is exercised for real against a `wiremock` server; only the
//! hosted widget and the toast surface are faked here.

use async_trait::async_trait;
use genie::payments::gateway::{CheckoutGateway, CheckoutOptions, GatewayOutcome};
use genie::payments::Notifier;
use std::cell::{Cell, RefCell};

/// Gateway that resolves every opening with a fixed outcome.
///
/// # Examples
///
/// ```ignore
/// let gateway = ScriptedGateway::new(GatewayOutcome::Cancelled);
/// let missing = ScriptedGateway::not_loaded();
/// ```
pub struct ScriptedGateway {
    loaded: Cell<bool>,
    outcome: GatewayOutcome,
    opened: RefCell<Vec<CheckoutOptions>>,
}

impl ScriptedGateway {
    pub fn new(outcome: GatewayOutcome) -> Self {
        Self {
            loaded: Cell::new(true),
            outcome,
            opened: RefCell::new(Vec::new()),
        }
    }

    /// A gateway whose script never finished loading.
    pub fn not_loaded() -> Self {
        let gateway = Self::new(GatewayOutcome::Cancelled);
        gateway.loaded.set(false);
        gateway
    }

    /// Options of every widget opened so far
    pub fn opened(&self) -> Vec<CheckoutOptions> {
        self.opened.borrow().clone()
    }
}

#[async_trait(?Send)]
impl CheckoutGateway for ScriptedGateway {
    fn is_loaded(&self) -> bool {
        self.loaded.get()
    }

    async fn open(&self, options: CheckoutOptions) -> GatewayOutcome {
        self.opened.borrow_mut().push(options);
        self.outcome.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Toast {
    Success(String),
    Error(String),
    Info(String),
}

/// Notifier that remembers every toast it was asked to show.
#[derive(Default)]
pub struct RecordingNotifier {
    toasts: RefCell<Vec<Toast>>,
}

impl RecordingNotifier {
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.toasts.borrow_mut().push(Toast::Success(message.to_string()));
    }

    fn error(&self, message: &str) {
        self.toasts.borrow_mut().push(Toast::Error(message.to_string()));
    }

    fn info(&self, message: &str) {
        self.toasts.borrow_mut().push(Toast::Info(message.to_string()));
    }
}
