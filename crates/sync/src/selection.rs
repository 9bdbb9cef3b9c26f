//! Warehouse selection flow.
//!
//! Submissions must target exactly one remote warehouse. The flow fetches
//! the directory first and only then decides how to proceed: a fetch
//! failure aborts with a notification, a single warehouse short-circuits
//! straight to submission, and anything else asks the user to choose.

use placevendor_core::{Notification, Warehouse};

use crate::auth::{self, CredentialStore};
use crate::vendor::VendorClient;

/// One selectable entry in the warehouse picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarehouseChoice {
    pub id: i64,
    /// Display label, `"{name} - {address}"` with a fixed placeholder for
    /// warehouses that have no address.
    pub label: String,
}

impl From<&Warehouse> for WarehouseChoice {
    fn from(warehouse: &Warehouse) -> Self {
        let address = warehouse.address.as_deref().unwrap_or("Sin dirección");
        Self {
            id: warehouse.id,
            label: format!("{} - {address}", warehouse.name),
        }
    }
}

/// Shape of a fetched warehouse directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionState {
    /// The company has no warehouses.
    Empty,
    /// Exactly one warehouse; selection is implicit.
    Single(i64),
    /// The user must pick one of these.
    Multiple(Vec<WarehouseChoice>),
}

impl SelectionState {
    /// Classify a fetched directory.
    #[must_use]
    pub fn from_warehouses(warehouses: &[Warehouse]) -> Self {
        match warehouses {
            [] => Self::Empty,
            [only] => Self::Single(only.id),
            many => Self::Multiple(many.iter().map(WarehouseChoice::from).collect()),
        }
    }
}

/// What the caller should do after opening the selection flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// The flow cannot proceed; show this to the user.
    Aborted(Notification),
    /// A sole warehouse was selected without user input.
    AutoSelected(i64),
    /// Render a picker over these choices.
    ChoiceRequired(Vec<WarehouseChoice>),
}

/// Open the selection flow for an (actor, tenant) pair.
///
/// Resolves the authentication gate, fetches the directory, and maps the
/// result onto a [`SelectionOutcome`]. Every failure path ends in an
/// `Aborted` notification; this function never returns an error.
pub async fn open_selection(
    store: &dyn CredentialStore,
    client: &VendorClient,
    actor_id: i64,
    tenant_id: i64,
    name_filter: Option<&str>,
) -> SelectionOutcome {
    let credentials = match auth::resolve(store, actor_id, tenant_id).credentials() {
        Ok(credentials) => credentials,
        Err(err) => {
            return SelectionOutcome::Aborted(Notification::danger("Error", err.to_string()));
        }
    };

    let warehouses = match client.list_warehouses(&credentials, name_filter).await {
        Ok(warehouses) => warehouses,
        Err(err) => {
            return SelectionOutcome::Aborted(Notification::danger("Error", err.to_string()));
        }
    };

    match SelectionState::from_warehouses(&warehouses) {
        SelectionState::Empty => SelectionOutcome::Aborted(Notification::warning(
            "Sin almacenes",
            "No hay almacenes disponibles para esta compañía",
        )),
        SelectionState::Single(id) => SelectionOutcome::AutoSelected(id),
        SelectionState::Multiple(choices) => SelectionOutcome::ChoiceRequired(choices),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn warehouse(id: i64, name: &str, address: Option<&str>) -> Warehouse {
        Warehouse {
            id,
            name: name.to_string(),
            address: address.map(ToOwned::to_owned),
            description: None,
            company_id: 1,
        }
    }

    #[test]
    fn empty_directory_is_empty_state() {
        assert_eq!(SelectionState::from_warehouses(&[]), SelectionState::Empty);
    }

    #[test]
    fn sole_warehouse_selects_itself() {
        let state = SelectionState::from_warehouses(&[warehouse(7, "Central", None)]);
        assert_eq!(state, SelectionState::Single(7));
    }

    #[test]
    fn multiple_warehouses_become_labelled_choices() {
        let state = SelectionState::from_warehouses(&[
            warehouse(7, "Central", Some("Av. Uno 100")),
            warehouse(8, "Norte", None),
        ]);

        let SelectionState::Multiple(choices) = state else {
            panic!("expected multiple");
        };
        assert_eq!(choices[0].label, "Central - Av. Uno 100");
        assert_eq!(choices[1].label, "Norte - Sin dirección");
        assert_eq!(choices[1].id, 8);
    }
}
