//! Line item validation
//!
//! A cart is rejected as a whole if any line is invalid; nothing is
//! clamped or skipped.

use rust_decimal::Decimal;
use shared::models::LineItem;

use crate::core::error::{LineItemField, PricingError};

/// Maximum allowed unit price (1,000,000)
pub const MAX_UNIT_PRICE: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);
/// Maximum allowed quantity per line
pub const MAX_QUANTITY: i32 = 9999;
/// Maximum allowed eco points per unit
pub const MAX_ECO_POINTS_PER_UNIT: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Validate a single line item
pub fn validate_line_item(index: usize, item: &LineItem) -> Result<(), PricingError> {
    if item.quantity < 1 {
        return Err(PricingError::InvalidLineItem {
            index,
            field: LineItemField::Quantity,
            reason: format!("quantity must be positive, got {}", item.quantity),
        });
    }
    if item.quantity > MAX_QUANTITY {
        return Err(PricingError::InvalidLineItem {
            index,
            field: LineItemField::Quantity,
            reason: format!(
                "quantity exceeds maximum allowed ({MAX_QUANTITY}), got {}",
                item.quantity
            ),
        });
    }

    if item.unit_price < Decimal::ZERO {
        return Err(PricingError::InvalidLineItem {
            index,
            field: LineItemField::UnitPrice,
            reason: format!("unit price must be non-negative, got {}", item.unit_price),
        });
    }
    if item.unit_price > MAX_UNIT_PRICE {
        return Err(PricingError::InvalidLineItem {
            index,
            field: LineItemField::UnitPrice,
            reason: format!(
                "unit price exceeds maximum allowed ({MAX_UNIT_PRICE}), got {}",
                item.unit_price
            ),
        });
    }

    if item.eco_points_per_unit < Decimal::ZERO {
        return Err(PricingError::InvalidLineItem {
            index,
            field: LineItemField::EcoPointsPerUnit,
            reason: format!(
                "eco points per unit must be non-negative, got {}",
                item.eco_points_per_unit
            ),
        });
    }
    if item.eco_points_per_unit > MAX_ECO_POINTS_PER_UNIT {
        return Err(PricingError::InvalidLineItem {
            index,
            field: LineItemField::EcoPointsPerUnit,
            reason: format!(
                "eco points per unit exceed maximum allowed ({MAX_ECO_POINTS_PER_UNIT}), got {}",
                item.eco_points_per_unit
            ),
        });
    }

    Ok(())
}

/// Validate every line item, failing on the first invalid one
pub fn validate_line_items(items: &[LineItem]) -> Result<(), PricingError> {
    items
        .iter()
        .enumerate()
        .try_for_each(|(index, item)| validate_line_item(index, item))
        .inspect_err(|e| tracing::warn!(error = %e, "Rejected cart"))
}
