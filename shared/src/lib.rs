//! Shared types for the EcoBazaarX pricing workspace
//!
//! Data model for carts, eco ranks and price breakdowns, plus the
//! unified error system used by the engine and its callers.

pub mod error;
pub mod money;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
pub use models::{CarbonRules, LineItem, PriceBreakdown, ProductCategory, RankName, RankTier};
