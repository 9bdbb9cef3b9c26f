//! Warehouse directory command.

use tracing::{info, warn};

use placevendor_sync::auth;
use placevendor_sync::selection::{self, SelectionOutcome};

use super::{CliError, bootstrap};

/// Fetch the directory and print the selection state it implies.
///
/// Probes authentication first so the gate is open for the fetch.
///
/// # Errors
///
/// Returns an error when configuration or client construction fails;
/// directory failures surface as an aborted selection, not an error.
pub async fn list(name_filter: Option<&str>) -> Result<(), CliError> {
    let (config, store, client) = bootstrap()?;

    auth::test_authentication(&store, &client, config.actor_id, config.tenant_id).await;

    let outcome = selection::open_selection(
        &store,
        &client,
        config.actor_id,
        config.tenant_id,
        name_filter,
    )
    .await;

    match outcome {
        SelectionOutcome::Aborted(notification) => {
            warn!("{}: {}", notification.title, notification.message);
        }
        SelectionOutcome::AutoSelected(id) => {
            info!(warehouse_id = id, "single warehouse, selected automatically");
        }
        SelectionOutcome::ChoiceRequired(choices) => {
            info!(count = choices.len(), "multiple warehouses available");
            for choice in choices {
                info!("  [{}] {}", choice.id, choice.label);
            }
        }
    }

    Ok(())
}
