//! Authentication probe command.
//!
//! Runs the standalone login mutation with the configured credentials and
//! reports the resulting notification. The store outcome matters for the
//! other commands: a successful probe opens the authentication gate.

use tracing::{info, warn};

use placevendor_core::Severity;
use placevendor_sync::auth;

use super::{CliError, bootstrap};

/// Run the login probe and report the outcome.
///
/// # Errors
///
/// Returns an error when configuration or client construction fails; a
/// rejected login is reported, not returned as an error.
pub async fn test() -> Result<(), CliError> {
    let (config, store, client) = bootstrap()?;

    info!(endpoint = %config.endpoint, email = %config.email, "testing authentication");

    let notification =
        auth::test_authentication(&store, &client, config.actor_id, config.tenant_id).await;

    match notification.severity {
        Severity::Success => info!("{}: {}", notification.title, notification.message),
        _ => warn!("{}: {}", notification.title, notification.message),
    }

    Ok(())
}
