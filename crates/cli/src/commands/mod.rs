//! CLI command implementations.

pub mod auth;
pub mod submit;
pub mod warehouses;

use thiserror::Error;

use placevendor_sync::auth::{CredentialRecord, CredentialStore, MemoryCredentialStore};
use placevendor_sync::config::{BridgeConfig, ConfigError};
use placevendor_sync::{VendorClient, VendorError};

/// Errors shared by the CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration loading failed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The vendor client could not be constructed or a call failed.
    #[error(transparent)]
    Vendor(#[from] VendorError),

    /// Reading or parsing an input file failed.
    #[error("Cannot read {path}: {source}")]
    InputFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The input file did not match the expected JSON shape.
    #[error("Invalid order file {path}: {source}")]
    InputFormat {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Wire the config into a credential store and a client.
///
/// The store is seeded with one unauthenticated record for the configured
/// (actor, tenant); commands that need the gate open run the probe first.
pub fn bootstrap() -> Result<(BridgeConfig, MemoryCredentialStore, VendorClient), CliError> {
    let config = BridgeConfig::from_env()?;

    let store = MemoryCredentialStore::new();
    store.save(CredentialRecord::new(
        config.actor_id,
        config.tenant_id,
        config.endpoint.clone(),
        config.email.clone(),
        config.password.clone(),
    ));

    let client = VendorClient::new(config.web_base_url.clone())?;

    Ok((config, store, client))
}
