//! Razorpay hosted checkout adapter
//!
//! Bridges the widget's JavaScript callbacks (`handler`, the
//! `payment.failed` event and `modal.ondismiss`) into a single
//! [`GatewayOutcome`] future.

use async_trait::async_trait;
use futures::channel::oneshot;
use genie::payments::gateway::{
    CheckoutGateway, CheckoutOptions, GatewayFailure, GatewayOutcome, PaymentReceipt,
};
use js_sys::{Array, Function, Object, Reflect, JSON};
use leptos::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

const GLOBAL_ENTRY_POINT: &str = "Razorpay";
const SCRIPT_ID: &str = "razorpay-checkout-js";

/// Injects the checkout script for the lifetime of the calling component.
///
/// The returned signal flips to `true` once the script's `load` event fired.
/// The tag is removed again when the component is cleaned up; a checkout
/// started after that sees the gateway as not loaded.
pub fn use_checkout_script(src: &str) -> ReadSignal<bool> {
    let (loaded, set_loaded) = signal(RazorpayGateway.is_loaded());

    let document = window().document();
    let already_present = document
        .as_ref()
        .and_then(|d| d.get_element_by_id(SCRIPT_ID))
        .is_some();

    if !already_present {
        if let Some(document) = document {
            if let Err(e) = inject_script(&document, src, set_loaded) {
                tracing::error!("Failed to inject checkout script: {:?}", e);
            }
        }
    }

    on_cleanup(|| {
        if let Some(script) = window()
            .document()
            .and_then(|d| d.get_element_by_id(SCRIPT_ID))
        {
            script.remove();
        }
    });

    loaded
}

fn inject_script(
    document: &web_sys::Document,
    src: &str,
    set_loaded: WriteSignal<bool>,
) -> Result<(), JsValue> {
    let script = document.create_element("script")?;
    script.set_attribute("id", SCRIPT_ID)?;
    script.set_attribute("src", src)?;
    script.set_attribute("async", "true")?;

    let on_load = Closure::<dyn FnMut()>::new(move || {
        // The component may be gone by the time the script arrives
        let _ = set_loaded.try_set(true);
    });
    script.add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref())?;
    on_load.forget();

    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;
    body.append_child(&script)?;
    Ok(())
}

/// Gateway backed by `window.Razorpay`
#[derive(Debug, Clone, Copy, Default)]
pub struct RazorpayGateway;

impl RazorpayGateway {
    fn constructor() -> Option<Function> {
        Reflect::get(&js_sys::global(), &JsValue::from_str(GLOBAL_ENTRY_POINT))
            .ok()
            .and_then(|value| value.dyn_into::<Function>().ok())
    }
}

fn stringify(value: &JsValue) -> String {
    JSON::stringify(value)
        .ok()
        .and_then(|s| s.as_string())
        .unwrap_or_default()
}

fn success_outcome(response: &JsValue) -> GatewayOutcome {
    match serde_json::from_str::<PaymentReceipt>(&stringify(response)) {
        Ok(receipt) => GatewayOutcome::Success(receipt),
        Err(e) => {
            tracing::error!("Unexpected payment handler payload: {}", e);
            GatewayOutcome::Failure {
                description: "Invalid response from payment gateway".to_string(),
            }
        }
    }
}

fn call_method(target: &JsValue, name: &str, args: &[&JsValue]) -> Result<JsValue, JsValue> {
    let method: Function = Reflect::get(target, &JsValue::from_str(name))?.dyn_into()?;
    match args {
        [] => method.call0(target),
        [a] => method.call1(target, a),
        [a, b] => method.call2(target, a, b),
        _ => Err(JsValue::from_str("unsupported argument count")),
    }
}

#[async_trait(?Send)]
impl CheckoutGateway for RazorpayGateway {
    fn is_loaded(&self) -> bool {
        Self::constructor().is_some()
    }

    async fn open(&self, options: CheckoutOptions) -> GatewayOutcome {
        let Some(constructor) = Self::constructor() else {
            return GatewayOutcome::Failure {
                description: "Payment gateway not loaded".to_string(),
            };
        };

        let (tx, rx) = oneshot::channel::<GatewayOutcome>();
        let tx = Rc::new(RefCell::new(Some(tx)));
        // First callback wins; the widget may fire more than one.
        let settle = move |outcome: GatewayOutcome| {
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(outcome);
            }
        };

        let on_success = Closure::<dyn FnMut(JsValue)>::new({
            let settle = settle.clone();
            move |response: JsValue| settle(success_outcome(&response))
        });
        let on_dismiss = Closure::<dyn FnMut()>::new({
            let settle = settle.clone();
            move || settle(GatewayOutcome::Cancelled)
        });

        let js_options = match serde_json::to_string(&options)
            .map_err(|e| JsValue::from_str(&e.to_string()))
            .and_then(|json| JSON::parse(&json))
        {
            Ok(value) => value,
            Err(e) => {
                tracing::error!("Failed to build checkout options: {:?}", e);
                return GatewayOutcome::Failure {
                    description: "Could not start the payment".to_string(),
                };
            }
        };

        let opened = (|| -> Result<JsValue, JsValue> {
            Reflect::set(&js_options, &"handler".into(), on_success.as_ref())?;
            let modal = Object::new();
            Reflect::set(&modal, &"ondismiss".into(), on_dismiss.as_ref())?;
            Reflect::set(&js_options, &"modal".into(), &modal)?;
            Reflect::construct(&constructor, &Array::of1(&js_options))
        })();

        let instance = match opened {
            Ok(instance) => instance,
            Err(e) => {
                tracing::error!("Failed to create checkout: {:?}", e);
                return GatewayOutcome::Failure {
                    description: "Could not start the payment".to_string(),
                };
            }
        };

        let on_failure = Closure::<dyn FnMut(JsValue)>::new({
            let settle = settle.clone();
            let instance = instance.clone();
            move |response: JsValue| {
                settle(GatewayFailure::outcome_from_json(&stringify(&response)));
                // Keep the widget from offering a retry the workflow would not see
                let _ = call_method(&instance, "close", &[]);
            }
        });

        let subscribed = call_method(
            &instance,
            "on",
            &[&JsValue::from_str("payment.failed"), on_failure.as_ref()],
        );
        if let Err(e) = subscribed.and_then(|_| call_method(&instance, "open", &[])) {
            tracing::error!("Failed to open checkout: {:?}", e);
            settle(GatewayOutcome::Failure {
                description: "Could not open the payment window".to_string(),
            });
        }

        let outcome = rx.await.unwrap_or(GatewayOutcome::Cancelled);

        // The closures must outlive every callback the widget can still fire
        // for this attempt; the widget is closed by now.
        drop((on_success, on_dismiss, on_failure));
        outcome
    }
}
