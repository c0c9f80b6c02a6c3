//! Line Item Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

fn default_quantity() -> i32 {
    1
}

/// One product entry in a cart or order
///
/// `unit_price` and `eco_points_per_unit` are per unit. A missing quantity
/// means one unit and missing eco points mean none, matching how carts
/// were stored before the engine existed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product reference, carried for receipts only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    /// Display name, carried for receipts only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
    #[serde(default = "default_quantity")]
    pub quantity: i32,
    /// Eco points ("carbon points") awarded per unit purchased
    #[serde(default, with = "rust_decimal::serde::float")]
    pub eco_points_per_unit: Decimal,
}

impl LineItem {
    pub fn new(unit_price: Decimal, quantity: i32, eco_points_per_unit: Decimal) -> Self {
        Self {
            product_id: None,
            name: None,
            unit_price,
            quantity,
            eco_points_per_unit,
        }
    }

    /// Attach product reference and display name
    pub fn with_product(mut self, product_id: impl Into<String>, name: impl Into<String>) -> Self {
        self.product_id = Some(product_id.into());
        self.name = Some(name.into());
        self
    }

    /// `unit_price × quantity`, unrounded; `None` on overflow
    pub fn line_total(&self) -> Option<Decimal> {
        self.unit_price.checked_mul(Decimal::from(self.quantity))
    }

    /// `eco_points_per_unit × quantity`, unrounded; `None` on overflow
    pub fn line_eco_points(&self) -> Option<Decimal> {
        self.eco_points_per_unit
            .checked_mul(Decimal::from(self.quantity))
    }
}
