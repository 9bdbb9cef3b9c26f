//! Remote warehouse listing entries.

use serde::{Deserialize, Serialize};

/// A warehouse as reported by the vendor platform.
///
/// Warehouses are sourced entirely from the remote directory query and are
/// never persisted locally; each selection round trip fetches them fresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warehouse {
    /// External id on the vendor platform.
    pub id: i64,
    /// Warehouse name.
    pub name: String,
    /// Street address, when configured remotely.
    #[serde(default)]
    pub address: Option<String>,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Owning company id on the vendor platform.
    pub company_id: i64,
}
