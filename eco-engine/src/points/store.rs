//! Points store port and its in-memory implementation

use dashmap::DashMap;
use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::core::error::PointsError;

/// Persistence port for buyer eco point balances
///
/// Each call is one atomic read-modify-write on a single buyer's
/// account. Implementations backed by a database run each call in one
/// transaction.
pub trait PointsStore: Send + Sync {
    /// Current balance; unknown buyers hold 0
    ///
    /// Errors report a failed read from the backing store.
    fn balance(&self, buyer: &str) -> Result<Decimal, PointsError>;

    /// Credit an order's points and return the new balance
    ///
    /// Fails with [`PointsError::OrderAlreadySettled`] if the order id was
    /// already credited for this buyer, revoked or not.
    fn credit_order(
        &self,
        buyer: &str,
        order_id: &str,
        points: Decimal,
    ) -> Result<Decimal, PointsError>;

    /// Take back an order's points and return the new balance
    ///
    /// The balance never drops below 0. Unknown or already revoked orders
    /// leave the balance unchanged.
    fn revoke_order(&self, buyer: &str, order_id: &str) -> Result<Decimal, PointsError>;
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum OrderPoints {
    Credited(Decimal),
    Revoked,
}

#[derive(Debug, Default)]
struct BuyerAccount {
    balance: Decimal,
    orders: HashMap<String, OrderPoints>,
}

/// In-process points store
///
/// Accounts live in a sharded map; every operation holds the buyer's
/// entry lock for its whole read-modify-write.
#[derive(Debug, Default)]
pub struct InMemoryPointsStore {
    accounts: DashMap<String, BuyerAccount>,
}

impl InMemoryPointsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a buyer with an opening balance (e.g. migrated history)
    pub fn with_balance(
        self,
        buyer: impl Into<String>,
        balance: Decimal,
    ) -> Result<Self, PointsError> {
        if balance < Decimal::ZERO {
            return Err(PointsError::InvalidPoints(balance));
        }
        self.accounts.entry(buyer.into()).or_default().balance = balance;
        Ok(self)
    }

    /// Number of buyers with an account
    pub fn buyer_count(&self) -> usize {
        self.accounts.len()
    }
}

impl PointsStore for InMemoryPointsStore {
    fn balance(&self, buyer: &str) -> Result<Decimal, PointsError> {
        Ok(self
            .accounts
            .get(buyer)
            .map(|account| account.balance)
            .unwrap_or(Decimal::ZERO))
    }

    fn credit_order(
        &self,
        buyer: &str,
        order_id: &str,
        points: Decimal,
    ) -> Result<Decimal, PointsError> {
        if points < Decimal::ZERO {
            return Err(PointsError::InvalidPoints(points));
        }

        let mut account = self.accounts.entry(buyer.to_string()).or_default();
        if account.orders.contains_key(order_id) {
            return Err(PointsError::OrderAlreadySettled {
                order_id: order_id.to_string(),
            });
        }

        let balance = account
            .balance
            .checked_add(points)
            .ok_or(PointsError::PointsOutOfRange(points))?;
        account
            .orders
            .insert(order_id.to_string(), OrderPoints::Credited(points));
        account.balance = balance;

        tracing::info!(
            buyer,
            order_id,
            points = %points,
            balance = %account.balance,
            "Eco points credited"
        );
        Ok(account.balance)
    }

    fn revoke_order(&self, buyer: &str, order_id: &str) -> Result<Decimal, PointsError> {
        let Some(mut account) = self.accounts.get_mut(buyer) else {
            tracing::debug!(buyer, order_id, "Revoke for unknown buyer ignored");
            return Ok(Decimal::ZERO);
        };

        let points = match account.orders.get(order_id) {
            Some(OrderPoints::Credited(points)) => *points,
            Some(OrderPoints::Revoked) | None => {
                tracing::debug!(buyer, order_id, "Nothing to revoke");
                return Ok(account.balance);
            }
        };

        account
            .orders
            .insert(order_id.to_string(), OrderPoints::Revoked);
        account.balance = (account.balance - points).max(Decimal::ZERO);

        tracing::info!(
            buyer,
            order_id,
            points = %points,
            balance = %account.balance,
            "Eco points revoked"
        );
        Ok(account.balance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_unknown_buyer_has_zero_balance() {
        let store = InMemoryPointsStore::new();
        assert_eq!(store.balance("nobody").unwrap(), Decimal::ZERO);
        assert_eq!(store.buyer_count(), 0);
    }

    #[test]
    fn test_credit_and_revoke() {
        let store = InMemoryPointsStore::new();
        assert_eq!(store.credit_order("b1", "o1", dec!(30)).unwrap(), dec!(30));
        assert_eq!(store.credit_order("b1", "o2", dec!(25)).unwrap(), dec!(55));
        assert_eq!(store.revoke_order("b1", "o1").unwrap(), dec!(25));
        assert_eq!(store.balance("b1").unwrap(), dec!(25));
    }

    #[test]
    fn test_duplicate_credit_rejected() {
        let store = InMemoryPointsStore::new();
        store.credit_order("b1", "o1", dec!(30)).unwrap();
        let err = store.credit_order("b1", "o1", dec!(30)).unwrap_err();
        assert!(matches!(err, PointsError::OrderAlreadySettled { ref order_id } if order_id == "o1"));
        assert_eq!(store.balance("b1").unwrap(), dec!(30));

        // A revoked order id cannot be credited again either
        store.revoke_order("b1", "o1").unwrap();
        assert!(store.credit_order("b1", "o1", dec!(30)).is_err());
        assert_eq!(store.balance("b1").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_same_order_id_for_different_buyers() {
        let store = InMemoryPointsStore::new();
        store.credit_order("b1", "o1", dec!(10)).unwrap();
        store.credit_order("b2", "o1", dec!(20)).unwrap();
        assert_eq!(store.balance("b1").unwrap(), dec!(10));
        assert_eq!(store.balance("b2").unwrap(), dec!(20));
    }

    #[test]
    fn test_revoke_is_idempotent() {
        let store = InMemoryPointsStore::new();
        store.credit_order("b1", "o1", dec!(40)).unwrap();
        store.credit_order("b1", "o2", dec!(15)).unwrap();
        assert_eq!(store.revoke_order("b1", "o1").unwrap(), dec!(15));
        assert_eq!(store.revoke_order("b1", "o1").unwrap(), dec!(15));
        assert_eq!(store.revoke_order("b1", "missing").unwrap(), dec!(15));
        assert_eq!(store.revoke_order("ghost", "o1").unwrap(), Decimal::ZERO);
        assert_eq!(store.buyer_count(), 1);
    }

    #[test]
    fn test_revoke_clamps_at_zero() {
        let store = InMemoryPointsStore::new();
        store.credit_order("b1", "o1", dec!(40)).unwrap();
        store.accounts.get_mut("b1").unwrap().balance = dec!(12);
        assert_eq!(store.revoke_order("b1", "o1").unwrap(), Decimal::ZERO);
        assert_eq!(store.balance("b1").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_negative_points_rejected() {
        let store = InMemoryPointsStore::new();
        let err = store.credit_order("b1", "o1", dec!(-3)).unwrap_err();
        assert!(matches!(err, PointsError::InvalidPoints(_)));
        assert!(InMemoryPointsStore::new().with_balance("b1", dec!(-1)).is_err());
        assert_eq!(store.balance("b1").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_credit_overflow_leaves_account_unchanged() {
        let store = InMemoryPointsStore::new()
            .with_balance("b1", Decimal::MAX)
            .unwrap();
        let err = store.credit_order("b1", "o1", dec!(1)).unwrap_err();
        assert_eq!(err, PointsError::PointsOutOfRange(dec!(1)));
        assert_eq!(store.balance("b1").unwrap(), Decimal::MAX);
        // The order id was not consumed
        assert_eq!(store.revoke_order("b1", "o1").unwrap(), Decimal::MAX);
    }

    #[test]
    fn test_concurrent_credits_sum_exactly() {
        let store = Arc::new(InMemoryPointsStore::new());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for i in 0..50 {
                        store
                            .credit_order("b1", &format!("o-{t}-{i}"), dec!(1.5))
                            .unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(store.balance("b1").unwrap(), dec!(600));
    }
}
