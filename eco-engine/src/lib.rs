//! Eco Engine - eco-rank pricing for a sustainable marketplace
//!
//! # Overview
//!
//! Buyers earn eco points with every order. Their lifetime total places
//! them in one of four ranks, and the rank decides the discount and
//! whether delivery is free on the next order.
//!
//! - **Ranking** (`ranking`): tier table, classification, progress
//! - **Pricing** (`pricing`): breakdown calculation and delivery policies
//! - **Carbon rules** (`carbon`): per-unit eco points for products
//! - **Points** (`points`): balance store and checkout flow
//! - **Quotes** (`quote`): JSON request/response used by `eco-quote`
//!
//! # Module layout
//!
//! ```text
//! eco-engine/src/
//! ├── core/      # config, errors
//! ├── ranking/   # tiers, progress
//! ├── pricing/   # calculator, delivery, engine, validation
//! ├── points/    # store, checkout
//! ├── carbon.rs
//! ├── quote.rs
//! └── utils/     # logger
//! ```
//!
//! # Example
//!
//! ```
//! use eco_engine::{EcoRankPricingEngine, FlatFee};
//! use rust_decimal::Decimal;
//! use shared::models::{LineItem, RankName};
//!
//! let engine = EcoRankPricingEngine::new(FlatFee(Decimal::from(50)));
//! let items = [LineItem::new(Decimal::from(200), 1, Decimal::from(5))];
//! let breakdown = engine.compute_breakdown(&items, Decimal::from(75)).unwrap();
//!
//! assert_eq!(breakdown.rank, RankName::NatureNurturer);
//! assert_eq!(breakdown.total_payable, Decimal::from(200));
//! ```

pub mod carbon;
pub mod core;
pub mod points;
pub mod pricing;
pub mod quote;
pub mod ranking;
pub mod utils;

pub use crate::core::{EngineConfig, LineItemField, PointsError, PricingError};
pub use points::{Checkout, ConfirmedOrder, InMemoryPointsStore, PointsStore, lifetime_points};
pub use pricing::{
    ConfiguredDelivery, DeliveryFn, DeliveryPolicy, DeliveryPolicyKind, EcoRankPricingEngine,
    FlatFee, NoDeliveryFee, PerLineItemFee, compute_breakdown,
};
pub use quote::{QuoteRequest, QuoteResponse};
pub use ranking::{RANK_TIERS, RankProgress, classify_rank, rank_progress};

pub use shared::money;

// Re-export unified error types from shared
pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env`, read configuration and start logging
pub fn setup_environment() -> AppResult<EngineConfig> {
    if let Err(e) = dotenv::dotenv()
        && !e.not_found()
    {
        eprintln!("Failed to load .env: {e}");
    }

    let config = EngineConfig::from_env()?;
    init_logger_with_file(
        Some(&config.log_level),
        config.log_json,
        config.log_dir.as_deref(),
    );
    Ok(config)
}
