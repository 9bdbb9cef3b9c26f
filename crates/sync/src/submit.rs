//! Order-level submission orchestration.
//!
//! Walks every fulfillment event of a confirmed order, submits each one,
//! and folds the per-event outcomes into a single user notification. One
//! failed event does not stop the rest.

use tracing::{info, instrument, warn};

use placevendor_core::{FulfillmentEvent, Notification, Order, OrderKind};

use crate::auth::{self, CredentialStore};
use crate::vendor::{BatchKind, VendorClient};

/// Submit an order's fulfillment events to the selected warehouse.
///
/// Sale orders send their deliveries, purchase orders their receptions.
/// Every event is attempted; failures are collected as
/// `"{doc_origin}: {error}"` lines and reported together. With no events
/// at all, nothing is sent and a warning explains why.
#[instrument(skip(store, client, order, events), fields(order_id = order.id, events = events.len()))]
pub async fn submit_order(
    store: &dyn CredentialStore,
    client: &VendorClient,
    actor_id: i64,
    tenant_id: i64,
    order: &Order,
    events: &[FulfillmentEvent],
    kind: OrderKind,
    warehouse_id: i64,
) -> Notification {
    let batch_kind = BatchKind::for_order(kind);
    let (verb, success_message) = match batch_kind {
        BatchKind::Delivery => (
            "entregas",
            "Entrega(s) enviada(s) a Place Vendor",
        ),
        BatchKind::Reception => (
            "recepciones",
            "Recepción(es) enviada(s) a Place Vendor",
        ),
    };

    if events.is_empty() {
        return Notification::warning(
            "Sin operaciones",
            format!("No hay {verb} para esta orden"),
        );
    }

    let credentials = match auth::resolve(store, actor_id, tenant_id).credentials() {
        Ok(credentials) => credentials,
        Err(err) => return Notification::danger("Error", err.to_string()),
    };

    let mut failures = Vec::new();
    for event in events {
        match client
            .submit_fulfillment(&credentials, event, order, batch_kind, warehouse_id)
            .await
        {
            Ok(receipt) => {
                info!(event_id = event.id, receipt_id = %receipt.id, "event submitted");
            }
            Err(err) => {
                let origin = event.doc_origin(batch_kind.origin_prefix());
                warn!(event_id = event.id, error = %err, "event submission failed");
                failures.push(format!("{origin}: {err}"));
            }
        }
    }

    if failures.is_empty() {
        Notification::success("Éxito", success_message)
    } else {
        Notification::danger("Error enviando a Place Vendor", failures.join("\n"))
    }
}
