//! Subscription checkout workflow
//!
//! ```text
//! Idle -> CreatingOrder -> AwaitingGatewayResult -> Verifying -> Completed
//!   \            \                  \       \              \
//!    +------------+------------------+-------+--------------+--> Failed
//!                                            +--> Cancelled (widget dismissed)
//! ```
//!
//! A subscription is only reported once the backend verified the payment;
//! a created order or a gateway success alone never counts as paid. Every
//! failure is converted into a notification plus an optional callback at
//! this boundary and nothing is retried.

use crate::api::SubscriptionApi;
use crate::payments::gateway::{
    CheckoutGateway, CheckoutOptions, GatewayOutcome, PaymentReceipt, Prefill, Theme,
};
use crate::types::{AppError, PaymentOrder, Subscription, VerifyPaymentRequest};
use crate::utils::config::CheckoutConfig;
use std::cell::Cell;
use std::rc::Rc;
use tracing::{error, info, warn};

pub const SUCCESS_MESSAGE: &str = "Payment successful! Your subscription is now active.";
pub const CANCELLED_MESSAGE: &str = "Payment cancelled.";

/// Where a checkout attempt currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutState {
    Idle,
    CreatingOrder,
    AwaitingGatewayResult,
    Verifying,
    Completed,
    Failed,
    Cancelled,
}

impl CheckoutState {
    /// Whether an attempt is in flight
    pub fn is_busy(self) -> bool {
        matches!(
            self,
            CheckoutState::CreatingOrder
                | CheckoutState::AwaitingGatewayResult
                | CheckoutState::Verifying
        )
    }
}

/// Plan being purchased
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanSelection {
    pub plan_id: String,
    pub plan_name: String,
}

impl PlanSelection {
    pub fn new(plan_id: impl Into<String>, plan_name: impl Into<String>) -> Self {
        Self {
            plan_id: plan_id.into(),
            plan_name: plan_name.into(),
        }
    }

    /// Both the id and the display name are non-blank.
    pub fn is_complete(&self) -> bool {
        !self.plan_id.trim().is_empty() && !self.plan_name.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CheckoutError {
    #[error("Plan ID is required")]
    MissingPlan,

    #[error("Payment gateway not loaded")]
    GatewayNotLoaded,

    #[error("Failed to create payment order: {0}")]
    OrderCreation(AppError),

    #[error("Payment failed: {description}")]
    PaymentFailed { description: String },

    #[error("Payment verification failed: {0}")]
    Verification(AppError),

    #[error("Payment cancelled")]
    Cancelled,
}

impl CheckoutError {
    /// Text shown to the customer
    pub fn user_message(&self) -> String {
        match self {
            CheckoutError::MissingPlan => "Plan ID is required".to_string(),
            CheckoutError::GatewayNotLoaded => {
                "Payment gateway not loaded. Please refresh the page and try again.".to_string()
            }
            CheckoutError::OrderCreation(_) => {
                "Failed to initiate payment. Please try again.".to_string()
            }
            CheckoutError::PaymentFailed { description } => description.clone(),
            CheckoutError::Verification(_) => {
                "Payment verification failed. Please contact support.".to_string()
            }
            CheckoutError::Cancelled => CANCELLED_MESSAGE.to_string(),
        }
    }
}

/// Transient user-facing notifications (toasts in the browser)
pub trait Notifier {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
    fn info(&self, message: &str);
}

/// Merchant details shown inside the widget
#[derive(Debug, Clone, PartialEq)]
pub struct Branding {
    pub name: String,
    pub image: Option<String>,
    pub theme_color: String,
}

impl Default for Branding {
    fn default() -> Self {
        Self::from(&CheckoutConfig::default())
    }
}

impl From<&CheckoutConfig> for Branding {
    fn from(config: &CheckoutConfig) -> Self {
        Self {
            name: config.brand_name.clone(),
            image: config.image.clone(),
            theme_color: config.theme_color.clone(),
        }
    }
}

type SuccessCallback = Box<dyn Fn(&Subscription)>;
type ErrorCallback = Box<dyn Fn(&CheckoutError)>;
type StateCallback = Box<dyn Fn(CheckoutState)>;

/// Orchestrates order creation, the hosted widget, and verification.
///
/// Concurrent calls to [`initiate`](Self::initiate) create independent
/// orders; callers disable their trigger while [`state`](Self::state) is
/// busy.
pub struct CheckoutWorkflow {
    api: Rc<dyn SubscriptionApi>,
    gateway: Rc<dyn CheckoutGateway>,
    notifier: Rc<dyn Notifier>,
    plan: Option<PlanSelection>,
    branding: Branding,
    prefill: Prefill,
    on_success: Option<SuccessCallback>,
    on_error: Option<ErrorCallback>,
    on_state_change: Option<StateCallback>,
    state: Cell<CheckoutState>,
}

impl CheckoutWorkflow {
    pub fn new(
        api: Rc<dyn SubscriptionApi>,
        gateway: Rc<dyn CheckoutGateway>,
        notifier: Rc<dyn Notifier>,
    ) -> Self {
        Self {
            api,
            gateway,
            notifier,
            plan: None,
            branding: Branding::default(),
            prefill: Prefill::default(),
            on_success: None,
            on_error: None,
            on_state_change: None,
            state: Cell::new(CheckoutState::Idle),
        }
    }

    /// Default plan used when [`initiate`](Self::initiate) gets none.
    pub fn with_plan(mut self, plan: PlanSelection) -> Self {
        self.plan = Some(plan);
        self
    }

    pub fn with_branding(mut self, branding: Branding) -> Self {
        self.branding = branding;
        self
    }

    pub fn with_prefill(mut self, prefill: Prefill) -> Self {
        self.prefill = prefill;
        self
    }

    /// Called with the verified subscription, once per completed attempt.
    pub fn on_success(mut self, callback: impl Fn(&Subscription) + 'static) -> Self {
        self.on_success = Some(Box::new(callback));
        self
    }

    /// Called with the underlying error whenever an attempt fails.
    pub fn on_error(mut self, callback: impl Fn(&CheckoutError) + 'static) -> Self {
        self.on_error = Some(Box::new(callback));
        self
    }

    pub fn on_state_change(mut self, callback: impl Fn(CheckoutState) + 'static) -> Self {
        self.on_state_change = Some(Box::new(callback));
        self
    }

    pub fn state(&self) -> CheckoutState {
        self.state.get()
    }

    /// Runs one checkout attempt for `plan` (or the default plan).
    ///
    /// Notifications and callbacks have already run when this returns; the
    /// result is for callers that want to react further.
    pub async fn initiate(
        &self,
        plan: Option<PlanSelection>,
    ) -> Result<Subscription, CheckoutError> {
        let result = self.run(plan).await;

        match &result {
            Ok(subscription) => {
                self.transition(CheckoutState::Completed);
                info!(subscription_id = ?subscription.id(), "Checkout completed");
                self.notifier.success(SUCCESS_MESSAGE);
                if let Some(callback) = &self.on_success {
                    callback(subscription);
                }
            }
            Err(CheckoutError::Cancelled) => {
                self.transition(CheckoutState::Cancelled);
                info!("Checkout dismissed by customer");
                self.notifier.info(CANCELLED_MESSAGE);
            }
            Err(err) => {
                self.transition(CheckoutState::Failed);
                error!("Checkout failed: {}", err);
                self.notifier.error(&err.user_message());
                if let Some(callback) = &self.on_error {
                    callback(err);
                }
            }
        }

        result
    }

    async fn run(&self, plan: Option<PlanSelection>) -> Result<Subscription, CheckoutError> {
        let plan = plan
            .or_else(|| self.plan.clone())
            .filter(PlanSelection::is_complete)
            .ok_or(CheckoutError::MissingPlan)?;

        if !self.gateway.is_loaded() {
            return Err(CheckoutError::GatewayNotLoaded);
        }

        self.transition(CheckoutState::CreatingOrder);
        info!(plan_id = %plan.plan_id, "Creating payment order");
        let order = self
            .api
            .create_order(&plan.plan_id)
            .await
            .map_err(CheckoutError::OrderCreation)?;

        // The script can be removed while the order request was in flight.
        if !self.gateway.is_loaded() {
            return Err(CheckoutError::GatewayNotLoaded);
        }

        self.transition(CheckoutState::AwaitingGatewayResult);
        let options = self.checkout_options(&order, &plan);
        let receipt = match self.gateway.open(options).await {
            GatewayOutcome::Success(receipt) => receipt,
            GatewayOutcome::Failure { description } => {
                return Err(CheckoutError::PaymentFailed { description });
            }
            GatewayOutcome::Cancelled => return Err(CheckoutError::Cancelled),
        };

        self.transition(CheckoutState::Verifying);
        self.verify(&order, &plan, receipt).await
    }

    async fn verify(
        &self,
        order: &PaymentOrder,
        plan: &PlanSelection,
        receipt: PaymentReceipt,
    ) -> Result<Subscription, CheckoutError> {
        if receipt.razorpay_order_id != order.order_id {
            warn!(
                expected = %order.order_id,
                received = %receipt.razorpay_order_id,
                "Gateway returned a different order id"
            );
        }

        let request = VerifyPaymentRequest {
            razorpay_order_id: receipt.razorpay_order_id,
            razorpay_payment_id: receipt.razorpay_payment_id,
            razorpay_signature: receipt.razorpay_signature,
            plan_id: plan.plan_id.clone(),
        };

        let data = self
            .api
            .verify_payment(&request)
            .await
            .map_err(CheckoutError::Verification)?;

        data.subscription.ok_or_else(|| {
            CheckoutError::Verification(AppError::InvalidResponse(
                "verification response has no subscription".to_string(),
            ))
        })
    }

    fn checkout_options(&self, order: &PaymentOrder, plan: &PlanSelection) -> CheckoutOptions {
        CheckoutOptions {
            key: order.razorpay_key_id.clone(),
            amount: order.amount,
            currency: order.currency.clone(),
            order_id: order.order_id.clone(),
            name: self.branding.name.clone(),
            description: format!("{} Plan", plan.plan_name),
            image: self.branding.image.clone(),
            prefill: self.prefill.clone(),
            theme: Theme {
                color: self.branding.theme_color.clone(),
            },
        }
    }

    fn transition(&self, next: CheckoutState) {
        self.state.set(next);
        if let Some(callback) = &self.on_state_change {
            callback(next);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockSubscriptionApi;
    use crate::types::VerifyPaymentData;
    use async_trait::async_trait;
    use std::cell::RefCell;

    struct FakeGateway {
        loaded: bool,
        outcome: GatewayOutcome,
        opened: RefCell<Vec<CheckoutOptions>>,
    }

    impl FakeGateway {
        fn new(outcome: GatewayOutcome) -> Self {
            Self {
                loaded: true,
                outcome,
                opened: RefCell::new(Vec::new()),
            }
        }

        fn unloaded() -> Self {
            Self {
                loaded: false,
                ..Self::new(GatewayOutcome::Cancelled)
            }
        }
    }

    #[async_trait(?Send)]
    impl CheckoutGateway for FakeGateway {
        fn is_loaded(&self) -> bool {
            self.loaded
        }

        async fn open(&self, options: CheckoutOptions) -> GatewayOutcome {
            self.opened.borrow_mut().push(options);
            self.outcome.clone()
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        messages: RefCell<Vec<(&'static str, String)>>,
    }

    impl Notifier for RecordingNotifier {
        fn success(&self, message: &str) {
            self.messages.borrow_mut().push(("success", message.to_string()));
        }
        fn error(&self, message: &str) {
            self.messages.borrow_mut().push(("error", message.to_string()));
        }
        fn info(&self, message: &str) {
            self.messages.borrow_mut().push(("info", message.to_string()));
        }
    }

    fn order() -> PaymentOrder {
        PaymentOrder {
            order_id: "o1".to_string(),
            amount: 9900,
            currency: "INR".to_string(),
            razorpay_key_id: "k1".to_string(),
        }
    }

    fn receipt() -> PaymentReceipt {
        PaymentReceipt {
            razorpay_order_id: "o1".to_string(),
            razorpay_payment_id: "p1".to_string(),
            razorpay_signature: "s1".to_string(),
        }
    }

    fn pro() -> PlanSelection {
        PlanSelection::new("pro-monthly", "Pro Monthly")
    }

    #[tokio::test]
    async fn test_missing_plan_makes_no_network_call() {
        let mut api = MockSubscriptionApi::new();
        api.expect_create_order().never();
        api.expect_verify_payment().never();
        let gateway = Rc::new(FakeGateway::new(GatewayOutcome::Success(receipt())));
        let notifier = Rc::new(RecordingNotifier::default());
        let errors = Rc::new(RefCell::new(Vec::new()));
        let sink = errors.clone();

        let workflow = CheckoutWorkflow::new(Rc::new(api), gateway.clone(), notifier.clone())
            .on_error(move |e| sink.borrow_mut().push(e.clone()));

        let result = workflow.initiate(Some(PlanSelection::new("", "Pro"))).await;

        assert_eq!(result, Err(CheckoutError::MissingPlan));
        assert_eq!(workflow.state(), CheckoutState::Failed);
        assert!(gateway.opened.borrow().is_empty());
        assert_eq!(*errors.borrow(), vec![CheckoutError::MissingPlan]);
        assert_eq!(
            *notifier.messages.borrow(),
            vec![("error", "Plan ID is required".to_string())]
        );
    }

    #[tokio::test]
    async fn test_blank_plan_name_makes_no_network_call() {
        let mut api = MockSubscriptionApi::new();
        api.expect_create_order().never();
        api.expect_verify_payment().never();
        let gateway = Rc::new(FakeGateway::new(GatewayOutcome::Success(receipt())));
        let notifier = Rc::new(RecordingNotifier::default());

        let workflow = CheckoutWorkflow::new(Rc::new(api), gateway.clone(), notifier.clone());
        let result = workflow
            .initiate(Some(PlanSelection::new("pro-monthly", "  ")))
            .await;

        assert_eq!(result, Err(CheckoutError::MissingPlan));
        assert!(gateway.opened.borrow().is_empty());
        assert_eq!(workflow.state(), CheckoutState::Failed);
    }

    #[tokio::test]
    async fn test_no_plan_at_all_is_validation_error() {
        let mut api = MockSubscriptionApi::new();
        api.expect_create_order().never();
        let workflow = CheckoutWorkflow::new(
            Rc::new(api),
            Rc::new(FakeGateway::new(GatewayOutcome::Cancelled)),
            Rc::new(RecordingNotifier::default()),
        );

        assert_eq!(workflow.initiate(None).await, Err(CheckoutError::MissingPlan));
    }

    #[tokio::test]
    async fn test_gateway_not_loaded_makes_no_network_call() {
        let mut api = MockSubscriptionApi::new();
        api.expect_create_order().never();
        api.expect_verify_payment().never();
        let notifier = Rc::new(RecordingNotifier::default());

        let workflow = CheckoutWorkflow::new(
            Rc::new(api),
            Rc::new(FakeGateway::unloaded()),
            notifier.clone(),
        )
        .with_plan(pro());

        let result = workflow.initiate(None).await;

        assert_eq!(result, Err(CheckoutError::GatewayNotLoaded));
        let messages = notifier.messages.borrow();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].1.starts_with("Payment gateway not loaded"));
    }

    #[tokio::test]
    async fn test_order_failure_does_not_open_widget() {
        let mut api = MockSubscriptionApi::new();
        api.expect_create_order().times(1).returning(|_| {
            Err(AppError::Network("connection refused".to_string()))
        });
        api.expect_verify_payment().never();
        let gateway = Rc::new(FakeGateway::new(GatewayOutcome::Success(receipt())));
        let notifier = Rc::new(RecordingNotifier::default());
        let errors = Rc::new(RefCell::new(Vec::new()));
        let sink = errors.clone();

        let workflow = CheckoutWorkflow::new(Rc::new(api), gateway.clone(), notifier.clone())
            .with_plan(pro())
            .on_error(move |e| sink.borrow_mut().push(e.clone()));

        let result = workflow.initiate(None).await;

        assert_eq!(
            result,
            Err(CheckoutError::OrderCreation(AppError::Network(
                "connection refused".to_string()
            )))
        );
        assert!(gateway.opened.borrow().is_empty());
        assert_eq!(errors.borrow().len(), 1);
        assert_eq!(
            notifier.messages.borrow()[0].1,
            "Failed to initiate payment. Please try again."
        );
    }

    #[tokio::test]
    async fn test_gateway_failure_reports_gateway_description() {
        let mut api = MockSubscriptionApi::new();
        api.expect_create_order().times(1).returning(|_| Ok(order()));
        api.expect_verify_payment().never();
        let notifier = Rc::new(RecordingNotifier::default());
        let successes = Rc::new(Cell::new(0));
        let counter = successes.clone();

        let workflow = CheckoutWorkflow::new(
            Rc::new(api),
            Rc::new(FakeGateway::new(GatewayOutcome::Failure {
                description: "Your card was declined".to_string(),
            })),
            notifier.clone(),
        )
        .with_plan(pro())
        .on_success(move |_| counter.set(counter.get() + 1));

        let err = workflow.initiate(None).await.unwrap_err();

        assert_eq!(workflow.state(), CheckoutState::Failed);
        assert_eq!(err.user_message(), "Your card was declined");
        assert_eq!(successes.get(), 0);
        assert_eq!(
            *notifier.messages.borrow(),
            vec![("error", "Your card was declined".to_string())]
        );
    }

    #[tokio::test]
    async fn test_verification_without_subscription_fails() {
        let mut api = MockSubscriptionApi::new();
        api.expect_create_order().returning(|_| Ok(order()));
        api.expect_verify_payment()
            .times(1)
            .returning(|_| Ok(VerifyPaymentData { subscription: None }));
        let notifier = Rc::new(RecordingNotifier::default());

        let workflow = CheckoutWorkflow::new(
            Rc::new(api),
            Rc::new(FakeGateway::new(GatewayOutcome::Success(receipt()))),
            notifier.clone(),
        )
        .with_plan(pro());

        let err = workflow.initiate(None).await.unwrap_err();

        assert!(matches!(err, CheckoutError::Verification(_)));
        assert_eq!(
            notifier.messages.borrow()[0].1,
            "Payment verification failed. Please contact support."
        );
    }

    #[tokio::test]
    async fn test_verification_error_is_distinct_from_gateway_failure() {
        let mut api = MockSubscriptionApi::new();
        api.expect_create_order().returning(|_| Ok(order()));
        api.expect_verify_payment().returning(|_| {
            Err(AppError::Api {
                status: Some(400),
                message: "Invalid signature".to_string(),
            })
        });
        let errors = Rc::new(RefCell::new(Vec::new()));
        let sink = errors.clone();

        let workflow = CheckoutWorkflow::new(
            Rc::new(api),
            Rc::new(FakeGateway::new(GatewayOutcome::Success(receipt()))),
            Rc::new(RecordingNotifier::default()),
        )
        .with_plan(pro())
        .on_error(move |e| sink.borrow_mut().push(e.clone()));

        let err = workflow.initiate(None).await.unwrap_err();

        assert_eq!(
            err,
            CheckoutError::Verification(AppError::Api {
                status: Some(400),
                message: "Invalid signature".to_string(),
            })
        );
        assert_eq!(*errors.borrow(), vec![err]);
    }

    #[tokio::test]
    async fn test_successful_checkout_passes_subscription_through() {
        let mut api = MockSubscriptionApi::new();
        api.expect_create_order()
            .withf(|plan_id| plan_id.to_string() == "pro-monthly")
            .times(1)
            .returning(|_| Ok(order()));
        api.expect_verify_payment()
            .withf(|req| {
                req.razorpay_order_id == "o1"
                    && req.razorpay_payment_id == "p1"
                    && req.razorpay_signature == "s1"
                    && req.plan_id == "pro-monthly"
            })
            .times(1)
            .returning(|_| {
                Ok(VerifyPaymentData {
                    subscription: Some(
                        serde_json::from_value(serde_json::json!({ "id": "sub1" })).unwrap(),
                    ),
                })
            });
        let gateway = Rc::new(FakeGateway::new(GatewayOutcome::Success(receipt())));
        let notifier = Rc::new(RecordingNotifier::default());
        let received = Rc::new(RefCell::new(Vec::new()));
        let sink = received.clone();
        let states = Rc::new(RefCell::new(Vec::new()));
        let state_sink = states.clone();

        let workflow = CheckoutWorkflow::new(Rc::new(api), gateway.clone(), notifier.clone())
            .with_plan(pro())
            .on_success(move |sub| sink.borrow_mut().push(sub.clone()))
            .on_error(|e| panic!("unexpected error callback: {}", e))
            .on_state_change(move |s| state_sink.borrow_mut().push(s));

        let sub = workflow.initiate(None).await.unwrap();

        assert_eq!(sub.id().as_deref(), Some("sub1"));
        assert_eq!(*received.borrow(), vec![sub]);
        assert_eq!(
            *notifier.messages.borrow(),
            vec![("success", SUCCESS_MESSAGE.to_string())]
        );
        assert_eq!(
            *states.borrow(),
            vec![
                CheckoutState::CreatingOrder,
                CheckoutState::AwaitingGatewayResult,
                CheckoutState::Verifying,
                CheckoutState::Completed,
            ]
        );

        let opened = gateway.opened.borrow();
        assert_eq!(opened.len(), 1);
        assert_eq!(opened[0].key, "k1");
        assert_eq!(opened[0].amount, 9900);
        assert_eq!(opened[0].order_id, "o1");
        assert_eq!(opened[0].description, "Pro Monthly Plan");
    }

    #[tokio::test]
    async fn test_dismissed_widget_is_cancelled_not_failed() {
        let mut api = MockSubscriptionApi::new();
        api.expect_create_order().returning(|_| Ok(order()));
        api.expect_verify_payment().never();
        let notifier = Rc::new(RecordingNotifier::default());

        let workflow = CheckoutWorkflow::new(
            Rc::new(api),
            Rc::new(FakeGateway::new(GatewayOutcome::Cancelled)),
            notifier.clone(),
        )
        .with_plan(pro())
        .on_error(|e| panic!("unexpected error callback: {}", e));

        assert_eq!(workflow.initiate(None).await, Err(CheckoutError::Cancelled));
        assert_eq!(workflow.state(), CheckoutState::Cancelled);
        assert_eq!(
            *notifier.messages.borrow(),
            vec![("info", CANCELLED_MESSAGE.to_string())]
        );
    }

    #[tokio::test]
    async fn test_per_call_plan_overrides_default() {
        let mut api = MockSubscriptionApi::new();
        api.expect_create_order()
            .withf(|plan_id| plan_id.to_string() == "team-yearly")
            .times(1)
            .returning(|_| Err(AppError::Network("offline".to_string())));

        let workflow = CheckoutWorkflow::new(
            Rc::new(api),
            Rc::new(FakeGateway::new(GatewayOutcome::Cancelled)),
            Rc::new(RecordingNotifier::default()),
        )
        .with_plan(pro());

        let result = workflow
            .initiate(Some(PlanSelection::new("team-yearly", "Team Yearly")))
            .await;
        assert!(matches!(result, Err(CheckoutError::OrderCreation(_))));
    }
}
