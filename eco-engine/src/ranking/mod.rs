//! Eco Rank Module
//!
//! Maps a buyer's lifetime eco points onto the canonical tier table and
//! reports how far the buyer is from the next tier.

mod progress;
mod tiers;

pub use progress::*;
pub use tiers::*;
