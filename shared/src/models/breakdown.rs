//! Price Breakdown Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::rank::RankName;
use crate::money::round_money;

/// Pricing result for one order
///
/// Every amount is kept at full precision; call [`PriceBreakdown::rounded`]
/// before showing it to a buyer or writing it to a receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    /// Σ unit_price × quantity
    #[serde(with = "rust_decimal::serde::float")]
    pub subtotal: Decimal,
    pub rank: RankName,
    #[serde(with = "rust_decimal::serde::float")]
    pub discount_percent: Decimal,
    /// subtotal × discount_percent / 100
    #[serde(with = "rust_decimal::serde::float")]
    pub discount_amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub delivery_charge: Decimal,
    /// max(0, subtotal - discount_amount + delivery_charge)
    #[serde(with = "rust_decimal::serde::float")]
    pub total_payable: Decimal,
    /// Σ eco_points_per_unit × quantity
    #[serde(with = "rust_decimal::serde::float")]
    pub order_eco_points: Decimal,
}

impl PriceBreakdown {
    /// Presentation copy with money and points rounded to 2 decimal places
    pub fn rounded(&self) -> Self {
        Self {
            subtotal: round_money(self.subtotal),
            rank: self.rank,
            discount_percent: self.discount_percent,
            discount_amount: round_money(self.discount_amount),
            delivery_charge: round_money(self.delivery_charge),
            total_payable: round_money(self.total_payable),
            order_eco_points: round_money(self.order_eco_points),
        }
    }
}
