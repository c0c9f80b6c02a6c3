//! Carbon Rules Model
//!
//! Admin-managed rules that decide how many eco points a product awards
//! per unit: `base_eco_points × category multiplier`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product category as far as carbon rules are concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    Plastic,
    Clothing,
    Electronics,
    Accessories,
    Other,
}

impl ProductCategory {
    /// Parse a free-form category label, case-insensitively
    ///
    /// Unknown labels map to `Other`.
    pub fn parse(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "plastic" => Self::Plastic,
            "clothing" => Self::Clothing,
            "electronics" => Self::Electronics,
            "accessories" => Self::Accessories,
            _ => Self::Other,
        }
    }
}

/// Carbon rules entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarbonRules {
    #[serde(with = "rust_decimal::serde::float")]
    pub base_eco_points: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub plastic_multiplier: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub clothing_multiplier: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub electronics_multiplier: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub accessories_multiplier: Decimal,
}

impl CarbonRules {
    /// Multiplier applied to `base_eco_points` for a category
    pub fn multiplier_for(&self, category: ProductCategory) -> Decimal {
        match category {
            ProductCategory::Plastic => self.plastic_multiplier,
            ProductCategory::Clothing => self.clothing_multiplier,
            ProductCategory::Electronics => self.electronics_multiplier,
            ProductCategory::Accessories => self.accessories_multiplier,
            ProductCategory::Other => Decimal::ONE,
        }
    }
}

impl Default for CarbonRules {
    fn default() -> Self {
        Self {
            base_eco_points: Decimal::TEN,
            plastic_multiplier: Decimal::new(15, 1),
            clothing_multiplier: Decimal::new(7, 1),
            electronics_multiplier: Decimal::TWO,
            accessories_multiplier: Decimal::new(9, 1),
        }
    }
}
