//! Bridge configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `PLACEVENDOR_EMAIL` - Place Vendor account email
//! - `PLACEVENDOR_PASSWORD` - Place Vendor account password
//!
//! ## Optional
//! - `PLACEVENDOR_ENDPOINT` - GraphQL endpoint URL (default: <http://placevendor.com/graphql>)
//! - `BRIDGE_WEB_BASE_URL` - Host base URL for product image links (default: http://localhost:8069)
//! - `BRIDGE_ACTOR_ID` - Acting user id (default: 1)
//! - `BRIDGE_TENANT_ID` - Tenant/company id (default: 1)

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

const DEFAULT_ENDPOINT: &str = "http://placevendor.com/graphql";
const DEFAULT_WEB_BASE_URL: &str = "http://localhost:8069";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Bridge configuration.
///
/// Implements `Debug` manually to redact the account password.
#[derive(Clone)]
pub struct BridgeConfig {
    /// Place Vendor GraphQL endpoint URL.
    pub endpoint: String,
    /// Place Vendor account email.
    pub email: String,
    /// Place Vendor account password.
    pub password: SecretString,
    /// Host base URL; product image links are made absolute against it.
    pub web_base_url: String,
    /// Acting user id for credential resolution.
    pub actor_id: i64,
    /// Tenant/company id for credential resolution.
    pub tenant_id: i64,
}

impl std::fmt::Debug for BridgeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BridgeConfig")
            .field("endpoint", &self.endpoint)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("web_base_url", &self.web_base_url)
            .field("actor_id", &self.actor_id)
            .field("tenant_id", &self.tenant_id)
            .finish()
    }
}

impl BridgeConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or URLs fail
    /// to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let endpoint = get_env_or_default("PLACEVENDOR_ENDPOINT", DEFAULT_ENDPOINT);
        validate_url("PLACEVENDOR_ENDPOINT", &endpoint)?;

        let web_base_url = get_env_or_default("BRIDGE_WEB_BASE_URL", DEFAULT_WEB_BASE_URL);
        validate_url("BRIDGE_WEB_BASE_URL", &web_base_url)?;

        Ok(Self {
            endpoint,
            email: get_required_env("PLACEVENDOR_EMAIL")?,
            password: SecretString::from(get_required_env("PLACEVENDOR_PASSWORD")?),
            web_base_url,
            actor_id: get_id_or_default("BRIDGE_ACTOR_ID", 1)?,
            tenant_id: get_id_or_default("BRIDGE_TENANT_ID", 1)?,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse an optional integer id, defaulting when unset.
fn get_id_or_default(key: &str, default: i64) -> Result<i64, ConfigError> {
    match std::env::var(key) {
        Ok(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidEnvVar(key.to_string(), value)),
        Err(_) => Ok(default),
    }
}

/// Reject values that do not parse as absolute URLs.
fn validate_url(key: &str, value: &str) -> Result<(), ConfigError> {
    Url::parse(value)
        .map(|_| ())
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}
