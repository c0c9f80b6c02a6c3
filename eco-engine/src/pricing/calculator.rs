//! Order Price Calculator
//!
//! Calculate an order's price breakdown from its line items and the
//! buyer's lifetime eco points:
//! - Rank discount (percentage of the subtotal)
//! - Delivery charge (waived by free-delivery ranks)
//! - Eco points earned by the order
//!
//! All intermediate values are full-precision `Decimal`s.

use rust_decimal::prelude::*;
use shared::models::{LineItem, PriceBreakdown};

use super::delivery::DeliveryPolicy;
use super::validation::validate_line_items;
use crate::core::error::PricingError;
use crate::ranking::classify_rank;

/// Σ unit_price × quantity
pub fn calculate_subtotal(items: &[LineItem]) -> Result<Decimal, PricingError> {
    checked_sum(items, LineItem::line_total, "subtotal")
}

/// Σ eco_points_per_unit × quantity
pub fn calculate_order_eco_points(items: &[LineItem]) -> Result<Decimal, PricingError> {
    checked_sum(items, LineItem::line_eco_points, "order_eco_points")
}

fn checked_sum<F>(
    items: &[LineItem],
    line: F,
    field: &'static str,
) -> Result<Decimal, PricingError>
where
    F: Fn(&LineItem) -> Option<Decimal>,
{
    items
        .iter()
        .try_fold(Decimal::ZERO, |acc, item| acc.checked_add(line(item)?))
        .ok_or(PricingError::AmountOutOfRange(field))
}

/// Calculate the price breakdown for one order
///
/// # Arguments
/// * `items` - Cart lines; may be empty
/// * `total_points` - Buyer's lifetime eco points (must be >= 0)
/// * `delivery` - Fee policy used when the rank does not waive delivery
///
/// # Calculation Steps
/// 1. Validate every line item
/// 2. subtotal = Σ unit_price × quantity
/// 3. Classify the rank from `total_points`
/// 4. discount = subtotal × rank discount% / 100
/// 5. delivery = 0 for free-delivery ranks, else `delivery.charge(items)`
/// 6. total = max(0, subtotal - discount + delivery)
/// 7. eco points = Σ eco_points_per_unit × quantity
pub fn compute_breakdown<P>(
    items: &[LineItem],
    total_points: Decimal,
    delivery: &P,
) -> Result<PriceBreakdown, PricingError>
where
    P: DeliveryPolicy + ?Sized,
{
    // Step 1: Reject invalid carts up front
    validate_line_items(items)?;

    // Step 2: Subtotal
    let subtotal = calculate_subtotal(items)?;

    // Step 3: Rank
    let tier = classify_rank(total_points)?;

    // Step 4: Rank discount
    let discount_amount = subtotal
        .checked_mul(tier.discount_percent)
        .map(|d| d / Decimal::ONE_HUNDRED)
        .ok_or(PricingError::AmountOutOfRange("discount_amount"))?;

    // Step 5: Delivery
    let delivery_charge = if tier.free_delivery {
        Decimal::ZERO
    } else {
        delivery.charge(items)
    };

    // Step 6: Total (never negative)
    let total_payable = (subtotal - discount_amount)
        .checked_add(delivery_charge)
        .ok_or(PricingError::AmountOutOfRange("total_payable"))?
        .max(Decimal::ZERO);

    // Step 7: Eco points earned
    let order_eco_points = calculate_order_eco_points(items)?;

    tracing::debug!(
        lines = items.len(),
        %total_points,
        rank = %tier.name,
        %subtotal,
        %discount_amount,
        %delivery_charge,
        %total_payable,
        %order_eco_points,
        "Computed price breakdown"
    );

    Ok(PriceBreakdown {
        subtotal,
        rank: tier.name,
        discount_percent: tier.discount_percent,
        discount_amount,
        delivery_charge,
        total_payable,
        order_eco_points,
    })
}

// ==================== Tests ====================
