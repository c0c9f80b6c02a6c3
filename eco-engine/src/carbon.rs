//! Carbon rules - per-unit eco points for catalog products
//!
//! A product awards `base_eco_points × category multiplier` per unit,
//! rounded to a whole number of points.

use rust_decimal::{Decimal, RoundingStrategy};
use shared::models::{CarbonRules, ProductCategory};

use crate::core::error::PricingError;

/// Points a product keeps when no carbon rules are configured and it
/// carries no value of its own
pub const DEFAULT_PRODUCT_ECO_POINTS: Decimal = Decimal::from_parts(50, 0, 0, false, 0);

/// Reject rules with a negative base or multiplier
pub fn validate_rules(rules: &CarbonRules) -> Result<(), PricingError> {
    let fields = [
        ("base_eco_points", rules.base_eco_points),
        ("plastic_multiplier", rules.plastic_multiplier),
        ("clothing_multiplier", rules.clothing_multiplier),
        ("electronics_multiplier", rules.electronics_multiplier),
        ("accessories_multiplier", rules.accessories_multiplier),
    ];

    match fields.iter().find(|(_, value)| *value < Decimal::ZERO) {
        Some((name, value)) => {
            tracing::warn!(field = *name, value = %value, "Rejected carbon rules");
            Err(PricingError::InvalidCarbonRules(format!(
                "{name} must not be negative, got {value}"
            )))
        }
        None => Ok(()),
    }
}

/// Whole eco points per unit for a product category
pub fn eco_points_for_category(
    rules: &CarbonRules,
    category: ProductCategory,
) -> Result<Decimal, PricingError> {
    validate_rules(rules)?;
    let raw = rules
        .base_eco_points
        .checked_mul(rules.multiplier_for(category))
        .ok_or_else(|| {
            PricingError::InvalidCarbonRules(format!(
                "base_eco_points × {category:?} multiplier is out of range"
            ))
        })?;
    Ok(raw.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
}

/// Eco points per unit to store on a product being created or updated
///
/// Without configured rules the product keeps `current`, or gets
/// [`DEFAULT_PRODUCT_ECO_POINTS`] if it has none.
pub fn eco_points_for_product(
    rules: Option<&CarbonRules>,
    category: ProductCategory,
    current: Option<Decimal>,
) -> Result<Decimal, PricingError> {
    match rules {
        Some(rules) => eco_points_for_category(rules, category),
        None => Ok(current.unwrap_or(DEFAULT_PRODUCT_ECO_POINTS)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_rules_per_category() {
        let rules = CarbonRules::default();
        let cases = [
            (ProductCategory::Plastic, dec!(15)),
            (ProductCategory::Clothing, dec!(7)),
            (ProductCategory::Electronics, dec!(20)),
            (ProductCategory::Accessories, dec!(9)),
            (ProductCategory::Other, dec!(10)),
        ];
        for (category, expected) in cases {
            assert_eq!(eco_points_for_category(&rules, category).unwrap(), expected);
        }
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        let rules = CarbonRules {
            base_eco_points: dec!(5),
            clothing_multiplier: dec!(0.7),
            plastic_multiplier: dec!(1.5),
            ..CarbonRules::default()
        };
        // 3.5 -> 4, 7.5 -> 8
        assert_eq!(
            eco_points_for_category(&rules, ProductCategory::Clothing).unwrap(),
            dec!(4)
        );
        assert_eq!(
            eco_points_for_category(&rules, ProductCategory::Plastic).unwrap(),
            dec!(8)
        );
    }

    #[test]
    fn test_negative_rules_rejected() {
        let rules = CarbonRules {
            electronics_multiplier: dec!(-2),
            ..CarbonRules::default()
        };
        let err = eco_points_for_category(&rules, ProductCategory::Plastic).unwrap_err();
        assert!(matches!(err, PricingError::InvalidCarbonRules(ref msg) if msg.contains("electronics_multiplier")));
        assert!(validate_rules(&CarbonRules::default()).is_ok());
    }

    #[test]
    fn test_oversized_rules_rejected() {
        let rules = CarbonRules {
            base_eco_points: Decimal::MAX,
            ..CarbonRules::default()
        };
        assert!(matches!(
            eco_points_for_category(&rules, ProductCategory::Electronics),
            Err(PricingError::InvalidCarbonRules(_))
        ));
        assert_eq!(
            eco_points_for_category(&rules, ProductCategory::Other).unwrap(),
            Decimal::MAX
        );
    }

    #[test]
    fn test_zero_rules_are_valid() {
        let rules = CarbonRules {
            base_eco_points: Decimal::ZERO,
            ..CarbonRules::default()
        };
        assert_eq!(
            eco_points_for_category(&rules, ProductCategory::Electronics).unwrap(),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_product_without_rules() {
        assert_eq!(
            eco_points_for_product(None, ProductCategory::Plastic, Some(dec!(12))).unwrap(),
            dec!(12)
        );
        assert_eq!(
            eco_points_for_product(None, ProductCategory::Plastic, None).unwrap(),
            DEFAULT_PRODUCT_ECO_POINTS
        );
    }

    #[test]
    fn test_product_with_rules_ignores_current() {
        let rules = CarbonRules::default();
        assert_eq!(
            eco_points_for_product(Some(&rules), ProductCategory::Electronics, Some(dec!(3)))
                .unwrap(),
            dec!(20)
        );
    }
}
