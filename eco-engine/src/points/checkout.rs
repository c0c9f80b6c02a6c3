//! Checkout - prices an order against the buyer's balance and settles
//! its eco points

use rust_decimal::Decimal;
use serde::Serialize;
use shared::models::{LineItem, PriceBreakdown};
use std::sync::Arc;

use super::store::PointsStore;
use crate::core::error::PointsError;
use crate::pricing::{ConfiguredDelivery, DeliveryPolicy, EcoRankPricingEngine};

/// Result of a confirmed order
#[derive(Debug, Clone, Serialize)]
pub struct ConfirmedOrder {
    pub order_id: String,
    /// Breakdown priced at the balance held before this order
    pub breakdown: PriceBreakdown,
    /// Balance after crediting this order's eco points
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
}

/// Checkout flow over a points store and a pricing engine
///
/// Pricing reads the balance once; crediting is a separate atomic store
/// call. Two orders confirmed concurrently for one buyer are both priced
/// at the earlier balance, but both credits land.
#[derive(Debug)]
pub struct Checkout<S, P = ConfiguredDelivery> {
    store: Arc<S>,
    engine: EcoRankPricingEngine<P>,
}

impl<S, P> Clone for Checkout<S, P>
where
    P: Clone,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            engine: self.engine.clone(),
        }
    }
}

impl<S: PointsStore, P: DeliveryPolicy> Checkout<S, P> {
    pub fn new(store: Arc<S>, engine: EcoRankPricingEngine<P>) -> Self {
        Self { store, engine }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn engine(&self) -> &EcoRankPricingEngine<P> {
        &self.engine
    }

    /// Price a cart for the buyer's current balance without settling it
    pub fn quote(&self, buyer: &str, items: &[LineItem]) -> Result<PriceBreakdown, PointsError> {
        let total_points = self.store.balance(buyer)?;
        Ok(self.engine.compute_breakdown(items, total_points)?)
    }

    /// Price the order and credit its eco points to the buyer
    ///
    /// Nothing is credited if pricing fails.
    pub fn confirm(
        &self,
        buyer: &str,
        order_id: &str,
        items: &[LineItem],
    ) -> Result<ConfirmedOrder, PointsError> {
        let breakdown = self.quote(buyer, items)?;
        let balance = self
            .store
            .credit_order(buyer, order_id, breakdown.order_eco_points)?;

        tracing::info!(
            buyer,
            order_id,
            rank = %breakdown.rank,
            total = %breakdown.total_payable,
            "Order confirmed"
        );

        Ok(ConfirmedOrder {
            order_id: order_id.to_string(),
            breakdown,
            balance,
        })
    }

    /// Cancel an order, taking back its eco points
    pub fn cancel(&self, buyer: &str, order_id: &str) -> Result<Decimal, PointsError> {
        let balance = self.store.revoke_order(buyer, order_id)?;
        tracing::info!(buyer, order_id, balance = %balance, "Order cancelled");
        Ok(balance)
    }

    /// Return an order, taking back its eco points
    pub fn return_order(&self, buyer: &str, order_id: &str) -> Result<Decimal, PointsError> {
        let balance = self.store.revoke_order(buyer, order_id)?;
        tracing::info!(buyer, order_id, balance = %balance, "Order returned");
        Ok(balance)
    }
}
