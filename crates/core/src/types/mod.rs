//! Host-side record types consumed by the outbound sync workflow.
//!
//! These are plain data snapshots of the host application's records, shaped
//! the way the bridge reads them. The host remains the system of record;
//! nothing here is written back except through the credential store.

mod contact;
mod fulfillment;
mod notification;
mod order;
mod product;
mod warehouse;

pub use contact::Contact;
pub use fulfillment::{FulfillmentEvent, MovementState};
pub use notification::{Notification, Severity};
pub use order::{Order, OrderKind, OrderLine};
pub use product::{Category, ProductRecord};
pub use warehouse::Warehouse;
