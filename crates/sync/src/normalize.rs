//! Pure mapping from host records to the vendor platform's input schema.
//!
//! Everything here is side-effect free. The sale and purchase paths share
//! one line normalizer parametrized by a [`LineProfile`] instead of two
//! near-identical code paths; the profile carries the three things that
//! actually differ (quantity field, model-type tag, low-stock default).

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use placevendor_core::{Contact, MovementState, Order, OrderKind, OrderLine, ProductRecord};

use crate::vendor::wire::{
    CategoryInput, ContactInput, ProductInput, ProductLineInput, ProductStatus,
};

/// Asset served when a product has no stored image.
const PLACEHOLDER_IMAGE_PATH: &str = "/web/static/img/placeholder.png";

/// Which order-line field carries the quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityField {
    /// `uom_qty` - sale order lines.
    UomQty,
    /// `product_qty` - purchase order lines.
    ProductQty,
}

/// Per-order-kind normalization parameters.
#[derive(Debug, Clone, Copy)]
pub struct LineProfile {
    pub quantity_field: QuantityField,
    pub model_type: &'static str,
    pub low_stock_default: i64,
}

impl LineProfile {
    /// Profile for the given order kind.
    ///
    /// The low-stock defaults differ on purpose: sale lines default to 0,
    /// purchase lines to 10.
    #[must_use]
    pub const fn for_kind(kind: OrderKind) -> Self {
        match kind {
            OrderKind::Sale => Self {
                quantity_field: QuantityField::UomQty,
                model_type: "sale_order_line",
                low_stock_default: 0,
            },
            OrderKind::Purchase => Self {
                quantity_field: QuantityField::ProductQty,
                model_type: "purchase_order_line",
                low_stock_default: 10,
            },
        }
    }

    fn quantity(&self, line: &OrderLine) -> i64 {
        let qty = match self.quantity_field {
            QuantityField::UomQty => line.uom_qty,
            QuantityField::ProductQty => line.product_qty,
        };
        decimal_to_i64(qty.unwrap_or_default())
    }
}

/// Flatten a contact for the wire, or produce the explicit
/// `"<role> no especificado"` placeholder when the contact is absent.
///
/// Callers must never send a missing contact without this placeholder.
#[must_use]
pub fn contact_input(contact: Option<&Contact>, role: &str) -> ContactInput {
    let Some(contact) = contact else {
        return ContactInput {
            name: format!("{role} no especificado"),
            email: String::new(),
            phone: String::new(),
            address: String::new(),
            city: String::new(),
            country: String::new(),
            state: String::new(),
            postal_code: String::new(),
            employed_occupation: String::new(),
        };
    };

    ContactInput {
        name: contact.name.clone().unwrap_or_default(),
        email: contact.email.clone().unwrap_or_default(),
        phone: contact
            .phone
            .clone()
            .filter(|p| !p.is_empty())
            .or_else(|| contact.mobile.clone())
            .unwrap_or_default(),
        address: contact.joined_street(),
        city: contact.city.clone().unwrap_or_default(),
        country: contact.country.clone().unwrap_or_default(),
        state: contact.state.clone().unwrap_or_default(),
        postal_code: contact.postal_code.clone().unwrap_or_default(),
        employed_occupation: contact.occupation.clone().unwrap_or_default(),
    }
}

/// Single-line postal address for a fulfillment destination.
///
/// Prefers the host-rendered display address (newlines collapsed to
/// `", "`), falling back to the joined street lines.
#[must_use]
pub fn partner_address(contact: &Contact) -> Option<String> {
    if let Some(display) = contact.display_address.as_deref() {
        let cleaned = display.trim().replace('\n', ", ");
        if !cleaned.is_empty() {
            return Some(cleaned);
        }
    }

    let joined = contact.joined_street();
    if joined.is_empty() { None } else { Some(joined) }
}

/// Map a product to the platform's publication status.
///
/// Inactive products are always DEACTIVATED. Active products that can be
/// transacted for this order kind are PUBLIC when web-published, PRIVATE
/// otherwise; active but non-transactable products are DEACTIVATED.
#[must_use]
pub fn product_status(product: &ProductRecord, kind: OrderKind) -> ProductStatus {
    if !product.active {
        return ProductStatus::Deactivated;
    }

    let transactable = match kind {
        OrderKind::Sale => product.sellable,
        OrderKind::Purchase => product.purchasable,
    };

    if transactable {
        if product.website_published {
            ProductStatus::Public
        } else {
            ProductStatus::Private
        }
    } else {
        ProductStatus::Deactivated
    }
}

/// URL of the largest available image variant, else the placeholder asset.
#[must_use]
pub fn product_image_url(product: &ProductRecord, base_url: &str) -> String {
    let base = base_url.trim_end_matches('/');
    product.image_sizes.iter().max().map_or_else(
        || format!("{base}{PLACEHOLDER_IMAGE_PATH}"),
        |size| format!("{base}/web/image/product.product/{}/image_{size}", product.id),
    )
}

/// Map a movement lifecycle state to the platform's status vocabulary.
#[must_use]
pub const fn movement_status(state: MovementState) -> &'static str {
    match state {
        MovementState::Draft | MovementState::Waiting => "PENDING",
        MovementState::Confirmed => "CONFIRMED",
        MovementState::Assigned => "ASSIGNED",
        MovementState::PartiallyAvailable => "PARTIAL",
        MovementState::Done => "COMPLETED",
        MovementState::Cancelled => "CANCELLED",
    }
}

/// Normalize one order line's product.
#[must_use]
pub fn product_input(line: &OrderLine, kind: OrderKind, base_url: &str) -> ProductInput {
    let profile = LineProfile::for_kind(kind);
    let product = &line.product;

    let kind_description = match kind {
        OrderKind::Sale => product.sales_description.as_deref(),
        OrderKind::Purchase => product.purchase_description.as_deref(),
    };
    let description = first_non_empty(&[
        line.description.as_deref(),
        kind_description,
        product.description.as_deref(),
    ]);

    let category = product.category.as_ref().map_or_else(
        || CategoryInput {
            name: "Sin categoría".to_string(),
            description: String::new(),
        },
        |cat| CategoryInput {
            name: cat
                .name
                .clone()
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| "Sin categoría".to_string()),
            description: cat.full_path.clone().unwrap_or_default(),
        },
    );

    let available_stock = decimal_to_i64(product.qty_available - product.outgoing_qty);

    ProductInput {
        name: product
            .name
            .clone()
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| "Producto sin nombre".to_string()),
        description,
        image: product_image_url(product, base_url),
        price: decimal_to_f64(line.unit_price),
        cost: decimal_to_f64(product.standard_cost),
        stock: decimal_to_i64(product.qty_available),
        warehouse_stock: available_stock,
        low_stock: product
            .reordering_min_qty
            .map_or(profile.low_stock_default, decimal_to_i64),
        sku: product.sku.clone().unwrap_or_default(),
        upc: product.barcode.clone().unwrap_or_default(),
        status: product_status(product, kind),
        have_variant: product.has_variants,
        category,
    }
}

/// Normalize every line of an order into `ProductLineInput`s.
#[must_use]
pub fn product_lines(order: &Order, kind: OrderKind, base_url: &str) -> Vec<ProductLineInput> {
    let profile = LineProfile::for_kind(kind);

    order
        .lines
        .iter()
        .map(|line| ProductLineInput {
            cant: profile.quantity(line),
            product: product_input(line, kind, base_url),
            model_id: line.id,
            model_type: profile.model_type.to_string(),
            description: first_non_empty(&[
                line.description.as_deref(),
                line.product.name.as_deref(),
            ]),
        })
        .collect()
}

fn first_non_empty(candidates: &[Option<&str>]) -> String {
    candidates
        .iter()
        .find_map(|c| c.filter(|s| !s.is_empty()))
        .unwrap_or_default()
        .to_string()
}

fn decimal_to_i64(value: Decimal) -> i64 {
    value.trunc().to_i64().unwrap_or_default()
}

fn decimal_to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}
