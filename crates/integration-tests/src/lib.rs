//! Integration tests for the Place Vendor bridge.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p placevendor-integration-tests
//! ```
//!
//! Every test runs against a local `wiremock` server standing in for the
//! Place Vendor GraphQL endpoint; nothing talks to the network.
//!
//! # Test Categories
//!
//! - `submission_flow` - full delivery/reception submissions over the wire
//! - `selection_flow` - authentication gate and warehouse selection
//! - `transport_behavior` - retry policy and error classification

use std::time::Duration;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use secrecy::SecretString;
use wiremock::MockServer;

use placevendor_core::{
    Category, Contact, FulfillmentEvent, MovementState, Order, OrderLine, ProductRecord,
};
use placevendor_sync::VendorClient;
use placevendor_sync::auth::{CredentialRecord, CredentialStore, MemoryCredentialStore};
use placevendor_sync::vendor::RetrySession;

/// A mock endpoint plus a store whose record already passed authentication.
pub struct TestContext {
    pub server: MockServer,
    pub store: MemoryCredentialStore,
    pub client: VendorClient,
    pub actor_id: i64,
    pub tenant_id: i64,
}

impl TestContext {
    /// Start a mock server and wire an authenticated credential record to it.
    pub async fn new() -> Self {
        let server = MockServer::start().await;

        let store = MemoryCredentialStore::new();
        let mut record = CredentialRecord::new(
            1,
            2,
            server.uri(),
            "ops@example.com",
            SecretString::from("hunter2"),
        );
        record.authenticated = true;
        store.save(record);

        let session = RetrySession::new()
            .expect("retry session")
            .with_backoff_factor(Duration::from_millis(5));
        let client = VendorClient::new("http://erp.example.com")
            .expect("vendor client")
            .with_session(session);

        Self {
            server,
            store,
            client,
            actor_id: 1,
            tenant_id: 2,
        }
    }

    /// Same context but with an unauthenticated record.
    pub async fn unauthenticated() -> Self {
        let ctx = Self::new().await;
        ctx.store.save(CredentialRecord::new(
            ctx.actor_id,
            ctx.tenant_id,
            ctx.server.uri(),
            "ops@example.com",
            SecretString::from("hunter2"),
        ));
        ctx
    }
}

/// A sale order with one line and a full partner.
#[must_use]
pub fn sample_order() -> Order {
    Order {
        id: 42,
        name: Some("SO0042".to_string()),
        partner: Some(Contact {
            name: Some("ACME S.A.".to_string()),
            email: Some("compras@acme.example".to_string()),
            phone: Some("555-0100".to_string()),
            street: Some("Av. Reforma 100".to_string()),
            street2: Some("Piso 3".to_string()),
            city: Some("CDMX".to_string()),
            country: Some("México".to_string()),
            postal_code: Some("06600".to_string()),
            ..Contact::default()
        }),
        responsible: Some(Contact {
            name: Some("Vendedor Uno".to_string()),
            email: Some("ventas@erp.example".to_string()),
            ..Contact::default()
        }),
        note: Some("entregar en recepción".to_string()),
        notes: None,
        origin: None,
        lines: vec![sample_line()],
    }
}

/// One order line over a published, sellable product.
#[must_use]
pub fn sample_line() -> OrderLine {
    OrderLine {
        id: 9,
        description: Some("Tornillos promo".to_string()),
        product: ProductRecord {
            id: 7,
            name: Some("Tornillo M8".to_string()),
            description: None,
            sales_description: Some("Tornillo de acero".to_string()),
            purchase_description: None,
            standard_cost: Decimal::new(125, 2),
            qty_available: Decimal::from(100),
            outgoing_qty: Decimal::from(15),
            reordering_min_qty: None,
            sku: Some("TOR-M8".to_string()),
            barcode: Some("7501234567890".to_string()),
            active: true,
            sellable: true,
            purchasable: true,
            website_published: true,
            has_variants: false,
            image_sizes: vec![1920],
            category: Some(Category {
                name: Some("Ferretería".to_string()),
                full_path: Some("Todo / Venta / Ferretería".to_string()),
            }),
        },
        uom_qty: Some(Decimal::from(12)),
        product_qty: Some(Decimal::from(12)),
        unit_price: Decimal::new(250, 2),
    }
}

/// A fulfillment event ready for submission.
#[must_use]
pub fn sample_event(id: i64, name: &str) -> FulfillmentEvent {
    FulfillmentEvent {
        id,
        name: Some(name.to_string()),
        scheduled_date: NaiveDate::from_ymd_opt(2026, 3, 14).and_then(|d| d.and_hms_opt(9, 30, 0)),
        done_date: None,
        state: MovementState::Assigned,
        partner: None,
    }
}
