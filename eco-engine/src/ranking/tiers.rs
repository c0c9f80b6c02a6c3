//! Canonical eco rank tiers and classification

use rust_decimal::Decimal;
use shared::models::{RankName, RankTier};

use crate::core::error::PricingError;

const fn points(value: u32) -> Decimal {
    Decimal::from_parts(value, 0, 0, false, 0)
}

/// The one tier table used everywhere: thresholds 0 / 50 / 100 / 200
///
/// Tiers are contiguous and ordered; the last tier is open-ended, so every
/// non-negative total matches exactly one tier.
pub static RANK_TIERS: [RankTier; 4] = [
    RankTier {
        name: RankName::EcoBeginner,
        min_points: points(0),
        max_points: Some(points(50)),
        discount_percent: points(10),
        free_delivery: false,
    },
    RankTier {
        name: RankName::NatureNurturer,
        min_points: points(50),
        max_points: Some(points(100)),
        discount_percent: points(0),
        free_delivery: true,
    },
    RankTier {
        name: RankName::GreenGuardian,
        min_points: points(100),
        max_points: Some(points(200)),
        discount_percent: points(15),
        free_delivery: false,
    },
    RankTier {
        name: RankName::EcoChampion,
        min_points: points(200),
        max_points: None,
        discount_percent: points(25),
        free_delivery: true,
    },
];

/// Reject negative point totals; they are never clamped
pub fn validate_points_total(total_points: Decimal) -> Result<(), PricingError> {
    if total_points < Decimal::ZERO {
        tracing::warn!(%total_points, "Rejected negative eco points total");
        return Err(PricingError::InvalidPointsTotal(total_points));
    }
    Ok(())
}

/// Classify a lifetime eco points total into its tier
pub fn classify_rank(total_points: Decimal) -> Result<&'static RankTier, PricingError> {
    validate_points_total(total_points)?;

    RANK_TIERS
        .iter()
        .find(|tier| tier.contains(total_points))
        .ok_or(PricingError::InvalidPointsTotal(total_points))
}

/// Look up a tier by name
pub fn tier_for(name: RankName) -> &'static RankTier {
    match name {
        RankName::EcoBeginner => &RANK_TIERS[0],
        RankName::NatureNurturer => &RANK_TIERS[1],
        RankName::GreenGuardian => &RANK_TIERS[2],
        RankName::EcoChampion => &RANK_TIERS[3],
    }
}

/// The tier directly above `name`, if any
pub fn next_tier(name: RankName) -> Option<&'static RankTier> {
    RANK_TIERS
        .iter()
        .position(|tier| tier.name == name)
        .and_then(|idx| RANK_TIERS.get(idx + 1))
}
