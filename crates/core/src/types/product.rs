//! Product and category snapshots.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product category with its full hierarchical path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Leaf category name.
    #[serde(default)]
    pub name: Option<String>,
    /// Full path (e.g. `Todo / Venta / Productos`).
    #[serde(default)]
    pub full_path: Option<String>,
}

/// A product as read from the host application, with the stock, pricing
/// and publication fields the vendor platform's input schema needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Host record id.
    pub id: i64,
    /// Product name.
    #[serde(default)]
    pub name: Option<String>,
    /// Generic description.
    #[serde(default)]
    pub description: Option<String>,
    /// Sales-channel description, preferred on delivery lines.
    #[serde(default)]
    pub sales_description: Option<String>,
    /// Purchase-channel description, preferred on reception lines.
    #[serde(default)]
    pub purchase_description: Option<String>,
    /// Standard cost.
    #[serde(default)]
    pub standard_cost: Decimal,
    /// On-hand quantity.
    #[serde(default)]
    pub qty_available: Decimal,
    /// Quantity already committed to outgoing moves.
    #[serde(default)]
    pub outgoing_qty: Decimal,
    /// Reordering rule minimum, when one is configured.
    #[serde(default)]
    pub reordering_min_qty: Option<Decimal>,
    /// Internal reference / SKU.
    #[serde(default)]
    pub sku: Option<String>,
    /// UPC/EAN barcode.
    #[serde(default)]
    pub barcode: Option<String>,
    /// Whether the record is active in the host.
    #[serde(default = "default_true")]
    pub active: bool,
    /// Can be sold.
    #[serde(default)]
    pub sellable: bool,
    /// Can be purchased.
    #[serde(default)]
    pub purchasable: bool,
    /// Published on the host's web channel.
    #[serde(default)]
    pub website_published: bool,
    /// Has attribute-based variants.
    #[serde(default)]
    pub has_variants: bool,
    /// Image variant sizes available for this product, largest first
    /// preferred (e.g. `[1920, 128, 64]`). Empty when no image is stored.
    #[serde(default)]
    pub image_sizes: Vec<u32>,
    /// Product category, if assigned.
    #[serde(default)]
    pub category: Option<Category>,
}

const fn default_true() -> bool {
    true
}
