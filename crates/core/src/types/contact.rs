//! Partner/contact records.

use serde::{Deserialize, Serialize};

/// A partner or user contact as read from the host application.
///
/// Covers customers, suppliers and responsible users alike; the sync layer
/// decides which role a contact plays when it normalizes one for the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Contact {
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Primary email address.
    #[serde(default)]
    pub email: Option<String>,
    /// Landline/primary phone.
    #[serde(default)]
    pub phone: Option<String>,
    /// Mobile phone, used as a fallback when `phone` is absent.
    #[serde(default)]
    pub mobile: Option<String>,
    /// First street line.
    #[serde(default)]
    pub street: Option<String>,
    /// Second street line.
    #[serde(default)]
    pub street2: Option<String>,
    /// City.
    #[serde(default)]
    pub city: Option<String>,
    /// Country name.
    #[serde(default)]
    pub country: Option<String>,
    /// State/province name.
    #[serde(default)]
    pub state: Option<String>,
    /// ZIP/postal code.
    #[serde(default)]
    pub postal_code: Option<String>,
    /// Job position / occupation.
    #[serde(default)]
    pub occupation: Option<String>,
    /// Host-rendered multi-line postal address, if the host provides one.
    #[serde(default)]
    pub display_address: Option<String>,
}

impl Contact {
    /// Street lines joined with `", "`, or an empty string when both are
    /// absent.
    #[must_use]
    pub fn joined_street(&self) -> String {
        let mut parts = Vec::new();
        if let Some(street) = self.street.as_deref().filter(|s| !s.is_empty()) {
            parts.push(street);
        }
        if let Some(street2) = self.street2.as_deref().filter(|s| !s.is_empty()) {
            parts.push(street2);
        }
        parts.join(", ")
    }
}
