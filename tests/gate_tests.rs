//! Route gate behaviour across a session's lifetime

use genie::auth::gate::{AuthStatus, GateDecision, RouteGate};
use genie::auth::session::{MemorySessionStore, SessionContext, SessionStore, SessionToken};
use genie::routes;
use genie::utils::config::ConsoleConfig;
use std::sync::Arc;

fn redirect(to: &str) -> GateDecision {
    GateDecision::Redirect {
        to: to.to_string(),
        replace: true,
    }
}

#[test]
fn test_sentinel_tokens_in_storage_gate_as_anonymous() {
    let gate = RouteGate::default();

    for raw in ["", "null", "undefined"] {
        let session = SessionContext::load(Arc::new(MemorySessionStore::with_token(raw)));

        assert_eq!(session.status(), AuthStatus::Unauthenticated);
        assert_eq!(
            gate.evaluate(routes::DASHBOARD, session.status()),
            redirect(routes::LOGIN)
        );
        assert_eq!(
            gate.evaluate(routes::LOGIN, session.status()),
            GateDecision::Render
        );
    }
}

#[test]
fn test_login_flow_flips_decisions() {
    let gate = RouteGate::default();
    let session = SessionContext::load(Arc::new(MemorySessionStore::new()));

    assert_eq!(
        gate.evaluate(routes::BILLING, session.status()),
        redirect(routes::LOGIN)
    );

    session
        .sign_in(SessionToken::new("t1").unwrap(), None)
        .unwrap();

    assert_eq!(
        gate.evaluate(routes::BILLING, session.status()),
        GateDecision::Render
    );
    assert_eq!(
        gate.evaluate(routes::LOGIN, session.status()),
        redirect(routes::DASHBOARD)
    );
    assert_eq!(
        gate.evaluate(routes::REGISTER, session.status()),
        redirect(routes::DASHBOARD)
    );
}

#[test]
fn test_logout_in_other_tab_applies_on_next_navigation() {
    let gate = RouteGate::default();
    let store = Arc::new(MemorySessionStore::with_token("t1"));
    let session = SessionContext::load(store.clone());

    assert_eq!(
        gate.evaluate("/genies/42", session.status()),
        GateDecision::Render
    );

    // Another tab cleared the shared storage
    store.remove("token").unwrap();
    session.sync_from_store();

    assert_eq!(
        gate.evaluate("/genies/43", session.status()),
        redirect(routes::LOGIN)
    );
}

#[test]
fn test_gate_built_from_config() {
    let config = ConsoleConfig::from_toml_str(
        r#"
        [routes]
        login = "/signin"
        home = "/genies"
        "#,
    )
    .unwrap();
    let gate = RouteGate::new(&config.routes.login, &config.routes.home);

    assert_eq!(
        gate.evaluate(routes::SETTINGS, AuthStatus::Unauthenticated),
        redirect("/signin")
    );
    assert_eq!(
        gate.evaluate(routes::LOGIN, AuthStatus::Authenticated),
        redirect("/genies")
    );
    assert_eq!(
        gate.evaluate(routes::SETTINGS, AuthStatus::Unknown),
        GateDecision::Loading
    );
}
