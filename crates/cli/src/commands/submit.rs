//! Order submission command.
//!
//! Reads an order snapshot from a JSON file, resolves the target warehouse
//! (explicit flag or the selection flow), and submits every fulfillment
//! event.

use serde::Deserialize;
use tracing::{info, warn};

use placevendor_core::{FulfillmentEvent, Order, OrderKind, Severity};
use placevendor_sync::selection::{self, SelectionOutcome};
use placevendor_sync::{auth, submit};

use super::{CliError, bootstrap};

/// JSON shape of an order snapshot file.
#[derive(Debug, Deserialize)]
struct OrderFile {
    order: Order,
    #[serde(default)]
    events: Vec<FulfillmentEvent>,
}

/// Submit the order in `path` to the given or auto-selected warehouse.
///
/// # Errors
///
/// Returns an error for configuration, file or format problems. Remote
/// failures are reported through the submission notification.
pub async fn order(path: &str, kind: OrderKind, warehouse: Option<i64>) -> Result<(), CliError> {
    let (config, store, client) = bootstrap()?;

    let raw = std::fs::read_to_string(path).map_err(|source| CliError::InputFile {
        path: path.to_string(),
        source,
    })?;
    let file: OrderFile = serde_json::from_str(&raw).map_err(|source| CliError::InputFormat {
        path: path.to_string(),
        source,
    })?;

    auth::test_authentication(&store, &client, config.actor_id, config.tenant_id).await;

    let warehouse_id = match warehouse {
        Some(id) => id,
        None => {
            let outcome = selection::open_selection(
                &store,
                &client,
                config.actor_id,
                config.tenant_id,
                None,
            )
            .await;

            match outcome {
                SelectionOutcome::AutoSelected(id) => id,
                SelectionOutcome::Aborted(notification) => {
                    warn!("{}: {}", notification.title, notification.message);
                    return Ok(());
                }
                SelectionOutcome::ChoiceRequired(choices) => {
                    warn!("several warehouses available, pass one with --warehouse:");
                    for choice in choices {
                        warn!("  [{}] {}", choice.id, choice.label);
                    }
                    return Ok(());
                }
            }
        }
    };

    let notification = submit::submit_order(
        &store,
        &client,
        config.actor_id,
        config.tenant_id,
        &file.order,
        &file.events,
        kind,
        warehouse_id,
    )
    .await;

    match notification.severity {
        Severity::Success => info!("{}: {}", notification.title, notification.message),
        _ => warn!("{}: {}", notification.title, notification.message),
    }

    Ok(())
}
