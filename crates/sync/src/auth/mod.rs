//! Credential records and the authentication gate.
//!
//! Every remote operation runs on behalf of an (actor, tenant) pair. A
//! [`CredentialRecord`] holds that pair's endpoint and account, plus the
//! outcome of the last authentication probe. Resolution is a two-step
//! gate: no record means "not configured", an unvalidated record means
//! "not authenticated", and only a validated record releases credentials.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Duration, Utc};
use secrecy::{ExposeSecret, SecretString};
use tracing::{info, warn};

use placevendor_core::Notification;

use crate::vendor::{VendorClient, VendorCredentials, VendorError};

/// Validity window granted to a token after a successful probe.
const TOKEN_LIFETIME_HOURS: i64 = 24;

/// Stored credentials and authentication state for one (actor, tenant).
#[derive(Clone)]
pub struct CredentialRecord {
    pub actor_id: i64,
    pub tenant_id: i64,
    /// GraphQL endpoint URL.
    pub endpoint: String,
    pub email: String,
    pub password: SecretString,
    /// Bearer token from the last successful probe. Informational: batch
    /// submissions always re-login, so an expired token never blocks them.
    pub token: Option<SecretString>,
    pub token_expires_at: Option<DateTime<Utc>>,
    /// Whether the last authentication probe succeeded.
    pub authenticated: bool,
    pub last_authenticated_at: Option<DateTime<Utc>>,
    pub last_error: Option<String>,
    /// Inactive records are invisible to resolution.
    pub active: bool,
}

impl CredentialRecord {
    /// A fresh, unauthenticated record.
    #[must_use]
    pub fn new(
        actor_id: i64,
        tenant_id: i64,
        endpoint: impl Into<String>,
        email: impl Into<String>,
        password: SecretString,
    ) -> Self {
        Self {
            actor_id,
            tenant_id,
            endpoint: endpoint.into(),
            email: email.into(),
            password,
            token: None,
            token_expires_at: None,
            authenticated: false,
            last_authenticated_at: None,
            last_error: None,
            active: true,
        }
    }

    /// The credential triple for a remote call.
    #[must_use]
    pub fn credentials(&self) -> VendorCredentials {
        VendorCredentials {
            endpoint: self.endpoint.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }

    fn mark_authenticated(&mut self, token: String, now: DateTime<Utc>) {
        self.authenticated = true;
        self.last_authenticated_at = Some(now);
        self.last_error = None;
        self.token = Some(SecretString::from(token));
        self.token_expires_at = Some(now + Duration::hours(TOKEN_LIFETIME_HOURS));
    }

    fn mark_failed(&mut self, error: String) {
        self.authenticated = false;
        self.last_error = Some(error);
    }
}

impl fmt::Debug for CredentialRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialRecord")
            .field("actor_id", &self.actor_id)
            .field("tenant_id", &self.tenant_id)
            .field("endpoint", &self.endpoint)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("authenticated", &self.authenticated)
            .field("active", &self.active)
            .finish_non_exhaustive()
    }
}

/// Storage boundary for credential records.
///
/// Lookup is keyed on the acting user and their tenant; only active
/// records are returned.
pub trait CredentialStore: Send + Sync {
    /// The active record for this (actor, tenant), if one exists.
    fn find(&self, actor_id: i64, tenant_id: i64) -> Option<CredentialRecord>;

    /// Persist a record, replacing any previous one for its pair.
    fn save(&self, record: CredentialRecord);
}

/// In-memory [`CredentialStore`].
#[derive(Default)]
pub struct MemoryCredentialStore {
    records: Mutex<HashMap<(i64, i64), CredentialRecord>>,
}

impl MemoryCredentialStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn find(&self, actor_id: i64, tenant_id: i64) -> Option<CredentialRecord> {
        let records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        records
            .get(&(actor_id, tenant_id))
            .filter(|record| record.active)
            .cloned()
    }

    fn save(&self, record: CredentialRecord) {
        let mut records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        records.insert((record.actor_id, record.tenant_id), record);
    }
}

/// Result of resolving the authentication gate for an (actor, tenant).
#[derive(Debug)]
pub enum AuthOutcome {
    /// No active record exists for this pair.
    NotConfigured,
    /// A record exists but its last probe did not succeed.
    NotAuthenticated(CredentialRecord),
    /// The record has passed an authentication probe.
    Ready(CredentialRecord),
}

impl AuthOutcome {
    /// The credentials if the gate is open, otherwise the matching error.
    ///
    /// # Errors
    ///
    /// [`VendorError::NotConfigured`] or [`VendorError::NotAuthenticated`].
    pub fn credentials(&self) -> Result<VendorCredentials, VendorError> {
        match self {
            Self::NotConfigured => Err(VendorError::NotConfigured),
            Self::NotAuthenticated(_) => Err(VendorError::NotAuthenticated),
            Self::Ready(record) => Ok(record.credentials()),
        }
    }
}

/// Resolve the authentication gate for an (actor, tenant) pair.
#[must_use]
pub fn resolve(store: &dyn CredentialStore, actor_id: i64, tenant_id: i64) -> AuthOutcome {
    match store.find(actor_id, tenant_id) {
        None => AuthOutcome::NotConfigured,
        Some(record) if record.authenticated => AuthOutcome::Ready(record),
        Some(record) => AuthOutcome::NotAuthenticated(record),
    }
}

/// Probe the login mutation with a record's credentials and persist the
/// outcome.
///
/// A success stores the token with a 24-hour expiry and clears the error
/// field; a failure clears the authenticated flag and records the error
/// text. The returned notification is user-facing either way.
pub async fn test_authentication(
    store: &dyn CredentialStore,
    client: &VendorClient,
    actor_id: i64,
    tenant_id: i64,
) -> Notification {
    let Some(mut record) = store.find(actor_id, tenant_id) else {
        return Notification::danger(
            "Error",
            "No hay configuración de Place Vendor para este usuario",
        );
    };

    match client.login(&record.credentials()).await {
        Ok(token) => {
            record.mark_authenticated(token, Utc::now());
            store.save(record);
            info!(actor_id, tenant_id, "authentication probe succeeded");
            Notification::success("Éxito", "Autenticación exitosa")
        }
        Err(err) => {
            let message = err.to_string();
            record.mark_failed(message.clone());
            store.save(record);
            warn!(actor_id, tenant_id, error = %message, "authentication probe failed");
            Notification::danger("Error", message)
        }
    }
}

/// Whether a stored token is still inside its validity window.
#[must_use]
pub fn token_is_current(record: &CredentialRecord, now: DateTime<Utc>) -> bool {
    record.token.as_ref().is_some_and(|t| !t.expose_secret().is_empty())
        && record.token_expires_at.is_some_and(|expiry| expiry > now)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> CredentialRecord {
        CredentialRecord::new(
            1,
            2,
            "http://placevendor.com/graphql",
            "ops@example.com",
            SecretString::from("hunter2"),
        )
    }

    #[test]
    fn debug_never_leaks_secrets() {
        let mut rec = record();
        rec.token = Some(SecretString::from("token-abc"));
        let rendered = format!("{rec:?}");
        assert!(!rendered.contains("hunter2"));
        assert!(!rendered.contains("token-abc"));
        assert!(rendered.contains("[REDACTED]"));
    }

    #[test]
    fn resolve_distinguishes_the_three_outcomes() {
        let store = MemoryCredentialStore::new();
        assert!(matches!(resolve(&store, 1, 2), AuthOutcome::NotConfigured));

        store.save(record());
        assert!(matches!(resolve(&store, 1, 2), AuthOutcome::NotAuthenticated(_)));

        let mut authed = record();
        authed.mark_authenticated("token-abc".to_string(), Utc::now());
        store.save(authed);
        assert!(matches!(resolve(&store, 1, 2), AuthOutcome::Ready(_)));
    }

    #[test]
    fn inactive_records_are_invisible() {
        let store = MemoryCredentialStore::new();
        let mut rec = record();
        rec.active = false;
        store.save(rec);
        assert!(matches!(resolve(&store, 1, 2), AuthOutcome::NotConfigured));
    }

    #[test]
    fn records_are_scoped_per_actor_and_tenant() {
        let store = MemoryCredentialStore::new();
        store.save(record());
        assert!(store.find(1, 2).is_some());
        assert!(store.find(1, 3).is_none());
        assert!(store.find(9, 2).is_none());
    }

    #[test]
    fn outcome_credentials_maps_to_errors() {
        let err = AuthOutcome::NotConfigured.credentials().expect_err("gate");
        assert_eq!(
            err.to_string(),
            "No hay configuración de Place Vendor para este usuario"
        );

        let err = AuthOutcome::NotAuthenticated(record())
            .credentials()
            .expect_err("gate");
        assert_eq!(err.to_string(), "No estás autenticado en Place Vendor");

        let mut authed = record();
        authed.mark_authenticated("token-abc".to_string(), Utc::now());
        let creds = AuthOutcome::Ready(authed).credentials().expect("open gate");
        assert_eq!(creds.email, "ops@example.com");
    }

    #[test]
    fn token_currency_respects_the_expiry_window() {
        let now = Utc::now();
        let mut rec = record();
        assert!(!token_is_current(&rec, now));

        rec.mark_authenticated("token-abc".to_string(), now);
        assert!(token_is_current(&rec, now));
        assert!(!token_is_current(&rec, now + Duration::hours(25)));
    }

    #[test]
    fn failed_probe_state_is_recorded() {
        let mut rec = record();
        rec.mark_authenticated("token-abc".to_string(), Utc::now());
        rec.mark_failed("Error HTTP: 500 - boom".to_string());

        assert!(!rec.authenticated);
        assert_eq!(rec.last_error.as_deref(), Some("Error HTTP: 500 - boom"));
        // The stale token stays around but the gate is closed.
        assert!(rec.token.is_some());
    }
}
