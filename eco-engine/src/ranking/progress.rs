//! Progress towards the next eco rank

use rust_decimal::Decimal;
use serde::Serialize;
use shared::models::RankName;

use super::tiers::{classify_rank, next_tier};
use crate::core::error::PricingError;

/// Where a buyer stands inside their current tier
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankProgress {
    pub current: RankName,
    pub next: Option<RankName>,
    /// Points still needed to reach `next`; `None` at the top tier
    #[serde(with = "rust_decimal::serde::float_option")]
    pub points_to_next: Option<Decimal>,
    /// Progress through the current tier, 0..=100 (100 at the top tier)
    #[serde(with = "rust_decimal::serde::float")]
    pub progress_percent: Decimal,
    /// Reward offer of the current tier
    pub offer: &'static str,
}

pub fn rank_progress(total_points: Decimal) -> Result<RankProgress, PricingError> {
    let tier = classify_rank(total_points)?;

    let (points_to_next, progress_percent) = match tier.max_points {
        Some(max) => {
            let span = max - tier.min_points;
            let percent = (total_points - tier.min_points) / span * Decimal::ONE_HUNDRED;
            (
                Some(max - total_points),
                percent.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED),
            )
        }
        None => (None, Decimal::ONE_HUNDRED),
    };

    Ok(RankProgress {
        current: tier.name,
        next: next_tier(tier.name).map(|t| t.name),
        points_to_next,
        progress_percent,
        offer: tier.name.offer(),
    })
}
