//! Data models
//!
//! Transient values shared by the pricing engine and its callers.
//! Money and eco points are `Decimal` at full precision; rounding happens
//! only when a value is presented (see [`PriceBreakdown::rounded`]).

pub mod breakdown;
pub mod carbon_rules;
pub mod line_item;
pub mod rank;

// Re-exports
pub use breakdown::*;
pub use carbon_rules::*;
pub use line_item::*;
pub use rank::*;
