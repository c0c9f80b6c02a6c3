//! Eco Rank Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Eco rank names, lowest to highest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RankName {
    #[serde(rename = "Eco Beginner")]
    EcoBeginner,
    #[serde(rename = "Nature Nurturer")]
    NatureNurturer,
    #[serde(rename = "Green Guardian")]
    GreenGuardian,
    #[serde(rename = "Eco Champion")]
    EcoChampion,
}

impl RankName {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::EcoBeginner => "Eco Beginner",
            Self::NatureNurturer => "Nature Nurturer",
            Self::GreenGuardian => "Green Guardian",
            Self::EcoChampion => "Eco Champion",
        }
    }

    /// Reward offer shown to buyers holding this rank
    pub const fn offer(&self) -> &'static str {
        match self {
            Self::EcoBeginner => "Start your green journey! Earn 10% off your eco purchases.",
            Self::NatureNurturer => "Great work! Enjoy free shipping on all eco-friendly products.",
            Self::GreenGuardian => "You're inspiring others! Get 15% off your sustainable orders.",
            Self::EcoChampion => {
                "You're a true planet protector! Unlock 25% off everything and free shipping."
            }
        }
    }
}

impl fmt::Display for RankName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A loyalty tier: `[min_points, max_points)` with its discount and delivery perk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankTier {
    pub name: RankName,
    /// Inclusive lower bound
    #[serde(with = "rust_decimal::serde::float")]
    pub min_points: Decimal,
    /// Exclusive upper bound, `None` for the open-ended top tier
    #[serde(with = "rust_decimal::serde::float_option")]
    pub max_points: Option<Decimal>,
    /// Discount percentage (10 = 10%)
    #[serde(with = "rust_decimal::serde::float")]
    pub discount_percent: Decimal,
    pub free_delivery: bool,
}

impl RankTier {
    /// Whether `points` falls inside this tier's half-open range
    pub fn contains(&self, points: Decimal) -> bool {
        points >= self.min_points && self.max_points.is_none_or(|max| points < max)
    }

    pub fn is_top(&self) -> bool {
        self.max_points.is_none()
    }
}
