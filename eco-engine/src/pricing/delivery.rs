//! Delivery Charge Policies
//!
//! The delivery fee is a strategy injected into the engine. It is only
//! consulted when the buyer's rank does not grant free delivery.

use enum_dispatch::enum_dispatch;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::models::LineItem;
use std::fmt;
use std::str::FromStr;

/// Computes the delivery fee for a cart
#[enum_dispatch]
pub trait DeliveryPolicy: Send + Sync {
    fn charge(&self, items: &[LineItem]) -> Decimal;
}

/// Same fee for every order, regardless of contents
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatFee(pub Decimal);

impl DeliveryPolicy for FlatFee {
    fn charge(&self, _items: &[LineItem]) -> Decimal {
        self.0
    }
}

/// Fee per distinct line (not per unit)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerLineItemFee(pub Decimal);

impl DeliveryPolicy for PerLineItemFee {
    fn charge(&self, items: &[LineItem]) -> Decimal {
        self.0.saturating_mul(Decimal::from(items.len()))
    }
}

/// Delivery is always free
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NoDeliveryFee;

impl DeliveryPolicy for NoDeliveryFee {
    fn charge(&self, _items: &[LineItem]) -> Decimal {
        Decimal::ZERO
    }
}

/// Adapts a closure into a [`DeliveryPolicy`]
#[derive(Clone, Copy)]
pub struct DeliveryFn<F>(pub F);

impl<F> DeliveryPolicy for DeliveryFn<F>
where
    F: Fn(&[LineItem]) -> Decimal + Send + Sync,
{
    fn charge(&self, items: &[LineItem]) -> Decimal {
        (self.0)(items)
    }
}

impl<F> fmt::Debug for DeliveryFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DeliveryFn(<closure>)")
    }
}

/// Built-in policies, selectable from configuration
#[enum_dispatch(DeliveryPolicy)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfiguredDelivery {
    Flat(FlatFee),
    PerLineItem(PerLineItemFee),
    Free(NoDeliveryFee),
}

impl ConfiguredDelivery {
    pub fn from_kind(kind: DeliveryPolicyKind, fee: Decimal) -> Self {
        match kind {
            DeliveryPolicyKind::Flat => FlatFee(fee).into(),
            DeliveryPolicyKind::PerItem => PerLineItemFee(fee).into(),
            DeliveryPolicyKind::Free => NoDeliveryFee.into(),
        }
    }

    pub fn kind(&self) -> DeliveryPolicyKind {
        match self {
            Self::Flat(_) => DeliveryPolicyKind::Flat,
            Self::PerLineItem(_) => DeliveryPolicyKind::PerItem,
            Self::Free(_) => DeliveryPolicyKind::Free,
        }
    }
}

impl Default for ConfiguredDelivery {
    fn default() -> Self {
        FlatFee(Decimal::from(50)).into()
    }
}

/// Policy selector as written in configuration (`flat`, `per_item`, `free`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryPolicyKind {
    #[default]
    Flat,
    PerItem,
    Free,
}

impl DeliveryPolicyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Flat => "flat",
            Self::PerItem => "per_item",
            Self::Free => "free",
        }
    }
}

impl FromStr for DeliveryPolicyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "flat" => Ok(Self::Flat),
            "per_item" | "per-item" | "per_line" => Ok(Self::PerItem),
            "free" | "none" => Ok(Self::Free),
            other => Err(format!("unknown delivery policy: {other}")),
        }
    }
}

impl fmt::Display for DeliveryPolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn cart() -> Vec<LineItem> {
        vec![
            LineItem::new(dec!(100), 3, dec!(1)),
            LineItem::new(dec!(20), 1, dec!(0)),
        ]
    }

    #[test]
    fn test_flat_fee_ignores_contents() {
        assert_eq!(FlatFee(dec!(50)).charge(&cart()), dec!(50));
        assert_eq!(FlatFee(dec!(50)).charge(&[]), dec!(50));
    }

    #[test]
    fn test_per_line_item_counts_lines_not_units() {
        assert_eq!(PerLineItemFee(dec!(50)).charge(&cart()), dec!(100));
        assert_eq!(PerLineItemFee(dec!(50)).charge(&[]), dec!(0));
    }

    #[test]
    fn test_per_line_item_saturates() {
        assert_eq!(PerLineItemFee(Decimal::MAX).charge(&cart()), Decimal::MAX);
    }

    #[test]
    fn test_no_delivery_fee() {
        assert_eq!(NoDeliveryFee.charge(&cart()), Decimal::ZERO);
    }

    #[test]
    fn test_closure_policy() {
        let per_unit = DeliveryFn(|items: &[LineItem]| {
            items.iter().map(|i| Decimal::from(i.quantity)).sum::<Decimal>() * dec!(5)
        });
        assert_eq!(per_unit.charge(&cart()), dec!(20));
    }

    #[test]
    fn test_configured_delivery_dispatch() {
        let flat = ConfiguredDelivery::from_kind(DeliveryPolicyKind::Flat, dec!(40));
        let per_item = ConfiguredDelivery::from_kind(DeliveryPolicyKind::PerItem, dec!(40));
        let free = ConfiguredDelivery::from_kind(DeliveryPolicyKind::Free, dec!(40));

        assert_eq!(flat.charge(&cart()), dec!(40));
        assert_eq!(per_item.charge(&cart()), dec!(80));
        assert_eq!(free.charge(&cart()), dec!(0));
        assert_eq!(per_item.kind(), DeliveryPolicyKind::PerItem);
        assert_eq!(
            ConfiguredDelivery::default(),
            ConfiguredDelivery::Flat(FlatFee(dec!(50)))
        );
    }

    #[test]
    fn test_policy_kind_parse() {
        assert_eq!("flat".parse::<DeliveryPolicyKind>(), Ok(DeliveryPolicyKind::Flat));
        assert_eq!(" PER_ITEM ".parse::<DeliveryPolicyKind>(), Ok(DeliveryPolicyKind::PerItem));
        assert_eq!("per-item".parse::<DeliveryPolicyKind>(), Ok(DeliveryPolicyKind::PerItem));
        assert_eq!("free".parse::<DeliveryPolicyKind>(), Ok(DeliveryPolicyKind::Free));
        assert!("express".parse::<DeliveryPolicyKind>().is_err());
        assert_eq!(DeliveryPolicyKind::PerItem.to_string(), "per_item");
    }
}
