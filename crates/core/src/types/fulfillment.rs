//! Stock movement records tied to confirmed orders.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::contact::Contact;

/// Lifecycle state of a stock movement in the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementState {
    Draft,
    Waiting,
    Confirmed,
    Assigned,
    PartiallyAvailable,
    Done,
    Cancelled,
}

/// A fulfillment event: an outgoing delivery or incoming reception linked
/// to an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FulfillmentEvent {
    /// Host record id.
    pub id: i64,
    /// Document code (e.g. `WH/OUT/00012`), used as the origin reference.
    #[serde(default)]
    pub name: Option<String>,
    /// Planned processing date.
    #[serde(default)]
    pub scheduled_date: Option<NaiveDateTime>,
    /// Completion date, set once the movement is done.
    #[serde(default)]
    pub done_date: Option<NaiveDateTime>,
    /// Current lifecycle state.
    pub state: MovementState,
    /// Destination/source partner on the movement itself.
    #[serde(default)]
    pub partner: Option<Contact>,
}

impl FulfillmentEvent {
    /// Origin document reference, falling back to a synthetic code when the
    /// host left the name empty.
    #[must_use]
    pub fn doc_origin(&self, prefix: &str) -> String {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .map_or_else(|| format!("{prefix}-{}", self.id), ToOwned::to_owned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doc_origin_prefers_document_name() {
        let event = FulfillmentEvent {
            id: 7,
            name: Some("WH/OUT/00012".to_string()),
            scheduled_date: None,
            done_date: None,
            state: MovementState::Assigned,
            partner: None,
        };
        assert_eq!(event.doc_origin("PICK"), "WH/OUT/00012");
    }

    #[test]
    fn doc_origin_synthesizes_from_id() {
        let event = FulfillmentEvent {
            id: 7,
            name: None,
            scheduled_date: None,
            done_date: None,
            state: MovementState::Draft,
            partner: None,
        };
        assert_eq!(event.doc_origin("PICK"), "PICK-7");
    }
}
