//! Authentication gate and warehouse selection flow tests.

use placevendor_core::Severity;
use placevendor_sync::auth::{self, AuthOutcome, MemoryCredentialStore};
use placevendor_sync::selection::{SelectionOutcome, open_selection};

use wiremock::matchers::{body_partial_json, method};
use wiremock::{Mock, ResponseTemplate};

use placevendor_integration_tests::TestContext;

fn directory(warehouses: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "data": {"login": "token-abc", "warehouses": {"data": warehouses}}
    }))
}

#[tokio::test]
async fn unconfigured_user_aborts_without_network_traffic() {
    let ctx = TestContext::new().await;
    Mock::given(method("POST"))
        .respond_with(directory(serde_json::json!([])))
        .expect(0)
        .mount(&ctx.server)
        .await;

    let empty_store = MemoryCredentialStore::new();
    let outcome = open_selection(&empty_store, &ctx.client, 1, 2, None).await;

    let SelectionOutcome::Aborted(notification) = outcome else {
        panic!("expected aborted selection");
    };
    assert_eq!(notification.severity, Severity::Danger);
    assert_eq!(
        notification.message,
        "No hay configuración de Place Vendor para este usuario"
    );
}

#[tokio::test]
async fn unauthenticated_record_aborts_the_flow() {
    let ctx = TestContext::unauthenticated().await;

    let outcome = open_selection(&ctx.store, &ctx.client, ctx.actor_id, ctx.tenant_id, None).await;

    let SelectionOutcome::Aborted(notification) = outcome else {
        panic!("expected aborted selection");
    };
    assert_eq!(notification.message, "No estás autenticado en Place Vendor");
}

#[tokio::test]
async fn authentication_probe_opens_the_gate() {
    let ctx = TestContext::unauthenticated().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"data": {"login": "token-abc"}})),
        )
        .mount(&ctx.server)
        .await;

    assert!(matches!(
        auth::resolve(&ctx.store, ctx.actor_id, ctx.tenant_id),
        AuthOutcome::NotAuthenticated(_)
    ));

    let notification =
        auth::test_authentication(&ctx.store, &ctx.client, ctx.actor_id, ctx.tenant_id).await;
    assert_eq!(notification.severity, Severity::Success);
    assert_eq!(notification.message, "Autenticación exitosa");

    assert!(matches!(
        auth::resolve(&ctx.store, ctx.actor_id, ctx.tenant_id),
        AuthOutcome::Ready(_)
    ));
}

#[tokio::test]
async fn failed_probe_records_the_error_and_keeps_the_gate_closed() {
    let ctx = TestContext::unauthenticated().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "errors": [{"message": "Credenciales inválidas", "path": ["login"]}]
        })))
        .mount(&ctx.server)
        .await;

    let notification =
        auth::test_authentication(&ctx.store, &ctx.client, ctx.actor_id, ctx.tenant_id).await;
    assert_eq!(notification.severity, Severity::Danger);
    assert!(notification.message.contains("Login: Credenciales inválidas"));

    let AuthOutcome::NotAuthenticated(record) =
        auth::resolve(&ctx.store, ctx.actor_id, ctx.tenant_id)
    else {
        panic!("gate should stay closed");
    };
    assert!(record.last_error.is_some());
}

#[tokio::test]
async fn empty_directory_aborts_with_a_warning() {
    let ctx = TestContext::new().await;
    Mock::given(method("POST"))
        .respond_with(directory(serde_json::json!([])))
        .mount(&ctx.server)
        .await;

    let outcome = open_selection(&ctx.store, &ctx.client, ctx.actor_id, ctx.tenant_id, None).await;

    let SelectionOutcome::Aborted(notification) = outcome else {
        panic!("expected aborted selection");
    };
    assert_eq!(notification.severity, Severity::Warning);
}

#[tokio::test]
async fn sole_warehouse_is_auto_selected() {
    let ctx = TestContext::new().await;
    Mock::given(method("POST"))
        .respond_with(directory(serde_json::json!([
            {"id": "7", "name": "Central", "address": "Av. Uno", "company_id": 3}
        ])))
        .mount(&ctx.server)
        .await;

    let outcome = open_selection(&ctx.store, &ctx.client, ctx.actor_id, ctx.tenant_id, None).await;
    assert_eq!(outcome, SelectionOutcome::AutoSelected(7));
}

#[tokio::test]
async fn several_warehouses_require_a_choice_with_labels() {
    let ctx = TestContext::new().await;
    Mock::given(method("POST"))
        .respond_with(directory(serde_json::json!([
            {"id": 7, "name": "Central", "address": "Av. Uno", "company_id": 3},
            {"id": 8, "name": "Norte", "address": null, "company_id": 3}
        ])))
        .mount(&ctx.server)
        .await;

    let outcome = open_selection(&ctx.store, &ctx.client, ctx.actor_id, ctx.tenant_id, None).await;

    let SelectionOutcome::ChoiceRequired(choices) = outcome else {
        panic!("expected a choice");
    };
    assert_eq!(choices.len(), 2);
    assert_eq!(choices[0].label, "Central - Av. Uno");
    assert_eq!(choices[1].label, "Norte - Sin dirección");
}

#[tokio::test]
async fn name_filter_travels_in_the_directory_query() {
    let ctx = TestContext::new().await;
    Mock::given(method("POST"))
        .and(body_partial_json(serde_json::json!({
            "variables": {"name": "Central", "first": 50}
        })))
        .respond_with(directory(serde_json::json!([
            {"id": 7, "name": "Central", "address": "Av. Uno", "company_id": 3}
        ])))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let outcome = open_selection(
        &ctx.store,
        &ctx.client,
        ctx.actor_id,
        ctx.tenant_id,
        Some("Central"),
    )
    .await;
    assert_eq!(outcome, SelectionOutcome::AutoSelected(7));
}

#[tokio::test]
async fn directory_fetch_failure_becomes_a_notification() {
    let ctx = TestContext::new().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&ctx.server)
        .await;

    let outcome = open_selection(&ctx.store, &ctx.client, ctx.actor_id, ctx.tenant_id, None).await;

    let SelectionOutcome::Aborted(notification) = outcome else {
        panic!("expected aborted selection");
    };
    assert_eq!(notification.severity, Severity::Danger);
    assert_eq!(notification.message, "Error HTTP: 404 - not found");
}
