//! Eco Points Ledger
//!
//! Buyer balances and the checkout flow that credits an order's eco
//! points on confirmation and takes them back on cancel or return.

mod checkout;
mod store;

pub use checkout::{Checkout, ConfirmedOrder};
pub use store::{InMemoryPointsStore, PointsStore};

use rust_decimal::Decimal;

use crate::core::error::PointsError;

/// Lifetime eco points from the points earned by each past order
pub fn lifetime_points<I>(order_points: I) -> Result<Decimal, PointsError>
where
    I: IntoIterator<Item = Decimal>,
{
    order_points.into_iter().try_fold(Decimal::ZERO, |acc, points| {
        if points < Decimal::ZERO {
            return Err(PointsError::InvalidPoints(points));
        }
        acc.checked_add(points)
            .ok_or(PointsError::PointsOutOfRange(points))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_lifetime_points() {
        assert_eq!(lifetime_points([]).unwrap(), Decimal::ZERO);
        assert_eq!(
            lifetime_points([dec!(20), dec!(35.5), dec!(0)]).unwrap(),
            dec!(55.5)
        );
    }

    #[test]
    fn test_lifetime_points_overflow() {
        let err = lifetime_points([Decimal::MAX, dec!(1)]).unwrap_err();
        assert_eq!(err, PointsError::PointsOutOfRange(dec!(1)));
    }

    #[test]
    fn test_lifetime_points_rejects_negative_order() {
        let err = lifetime_points([dec!(10), dec!(-1)]).unwrap_err();
        assert!(matches!(err, PointsError::InvalidPoints(p) if p == dec!(-1)));
    }
}
