//! Sales and purchase order snapshots.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::contact::Contact;
use super::product::ProductRecord;

/// Which side of the business an order belongs to.
///
/// The two kinds share one submission pipeline but differ in the wire
/// mutation (delivery vs. reception) and in a few normalization details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderKind {
    /// Customer order; confirmed orders produce outgoing deliveries.
    Sale,
    /// Supplier order; confirmed orders produce incoming receptions.
    Purchase,
}

/// A confirmed order header with its line collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Host record id.
    pub id: i64,
    /// Document name (e.g. `SO0042`), used as the submission signature.
    #[serde(default)]
    pub name: Option<String>,
    /// Customer (sale) or supplier (purchase).
    #[serde(default)]
    pub partner: Option<Contact>,
    /// Responsible user on the order.
    #[serde(default)]
    pub responsible: Option<Contact>,
    /// Free-form note (sale orders).
    #[serde(default)]
    pub note: Option<String>,
    /// Internal notes (purchase orders).
    #[serde(default)]
    pub notes: Option<String>,
    /// Source document reference.
    #[serde(default)]
    pub origin: Option<String>,
    /// Ordered line items.
    #[serde(default)]
    pub lines: Vec<OrderLine>,
}

/// One order line referencing a product and a quantity.
///
/// Sale lines carry the quantity in `uom_qty`, purchase lines in
/// `product_qty`; the normalizer picks the field its line profile names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLine {
    /// Host record id of the line.
    pub id: i64,
    /// Line description/note as entered on the order.
    #[serde(default)]
    pub description: Option<String>,
    /// The product being moved.
    pub product: ProductRecord,
    /// Quantity in the order's unit of measure (sale lines).
    #[serde(default)]
    pub uom_qty: Option<Decimal>,
    /// Quantity in product units (purchase lines).
    #[serde(default)]
    pub product_qty: Option<Decimal>,
    /// Unit price on the line.
    #[serde(default)]
    pub unit_price: Decimal,
}
