//! Eco Rank Pricing Engine
//!
//! Stateless front for rank classification and order pricing with an
//! injected delivery policy.

use rust_decimal::Decimal;
use shared::models::{LineItem, PriceBreakdown, RankTier};

use super::calculator::compute_breakdown;
use super::delivery::{ConfiguredDelivery, DeliveryPolicy};
use crate::core::EngineConfig;
use crate::core::error::PricingError;
use crate::ranking::{RankProgress, classify_rank, rank_progress};

/// Eco Rank Pricing Engine - prices carts for a buyer's eco rank
///
/// Holds no state besides the delivery policy, so one engine can serve
/// any number of concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct EcoRankPricingEngine<P = ConfiguredDelivery> {
    delivery: P,
}

impl EcoRankPricingEngine<ConfiguredDelivery> {
    /// Build an engine with the delivery policy selected in configuration
    pub fn from_config(config: &EngineConfig) -> Self {
        let delivery = config.delivery();
        tracing::info!(
            policy = %delivery.kind(),
            fee = %config.delivery_fee,
            "Pricing engine configured"
        );
        Self::new(delivery)
    }
}

impl<P: DeliveryPolicy> EcoRankPricingEngine<P> {
    pub fn new(delivery: P) -> Self {
        Self { delivery }
    }

    pub fn delivery(&self) -> &P {
        &self.delivery
    }

    /// Classify a lifetime eco points total into its tier
    pub fn classify_rank(&self, total_points: Decimal) -> Result<&'static RankTier, PricingError> {
        classify_rank(total_points)
    }

    /// Current tier, next tier and progress between them
    pub fn rank_progress(&self, total_points: Decimal) -> Result<RankProgress, PricingError> {
        rank_progress(total_points)
    }

    /// Price a cart for a buyer holding `total_points`
    pub fn compute_breakdown(
        &self,
        items: &[LineItem],
        total_points: Decimal,
    ) -> Result<PriceBreakdown, PricingError> {
        compute_breakdown(items, total_points, &self.delivery)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::delivery::{DeliveryPolicyKind, PerLineItemFee};
    use rust_decimal_macros::dec;
    use shared::models::RankName;

    #[test]
    fn test_default_engine_uses_flat_fifty() {
        let engine: EcoRankPricingEngine = EcoRankPricingEngine::default();
        let items = vec![LineItem::new(dec!(100), 1, dec!(0))];
        let b = engine.compute_breakdown(&items, dec!(0)).unwrap();
        assert_eq!(b.delivery_charge, dec!(50));
    }

    #[test]
    fn test_custom_policy() {
        let engine = EcoRankPricingEngine::new(PerLineItemFee(dec!(25)));
        let items = vec![
            LineItem::new(dec!(100), 1, dec!(0)),
            LineItem::new(dec!(100), 1, dec!(0)),
        ];
        let b = engine.compute_breakdown(&items, dec!(120)).unwrap();
        assert_eq!(b.rank, RankName::GreenGuardian);
        assert_eq!(b.delivery_charge, dec!(50));
        assert_eq!(b.total_payable, dec!(220));
    }

    #[test]
    fn test_from_config() {
        let config = EngineConfig {
            delivery_policy: DeliveryPolicyKind::Free,
            ..EngineConfig::default()
        };
        let engine = EcoRankPricingEngine::from_config(&config);
        assert_eq!(engine.delivery().kind(), DeliveryPolicyKind::Free);

        let items = vec![LineItem::new(dec!(10), 1, dec!(0))];
        let b = engine.compute_breakdown(&items, dec!(0)).unwrap();
        assert_eq!(b.delivery_charge, dec!(0));
        assert_eq!(b.total_payable, dec!(9));
    }

    #[test]
    fn test_classify_and_progress_delegate() {
        let engine: EcoRankPricingEngine = EcoRankPricingEngine::default();
        assert_eq!(
            engine.classify_rank(dec!(100)).unwrap().name,
            RankName::GreenGuardian
        );
        assert_eq!(
            engine.rank_progress(dec!(25)).unwrap().progress_percent,
            dec!(50)
        );
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let engine: EcoRankPricingEngine = EcoRankPricingEngine::default();
        let items = vec![LineItem::new(dec!(19.99), 3, dec!(0.7))];
        let first = engine.compute_breakdown(&items, dec!(42)).unwrap();
        let second = engine.compute_breakdown(&items, dec!(42)).unwrap();
        assert_eq!(first, second);
    }
}
