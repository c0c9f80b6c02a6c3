//! Order Pricing Module
//!
//! Applies the buyer's eco rank to a cart: subtotal, rank discount,
//! delivery charge (unless the rank waives it) and eco points earned.
//! Everything here is pure; no call reads or writes shared state.

mod calculator;
pub mod delivery;
mod engine;
mod validation;

pub use calculator::*;
pub use delivery::{
    ConfiguredDelivery, DeliveryFn, DeliveryPolicy, DeliveryPolicyKind, FlatFee, NoDeliveryFee,
    PerLineItemFee,
};
pub use engine::*;
pub use validation::*;
