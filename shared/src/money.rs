//! Money calculation utilities using rust_decimal for precision
//!
//! All arithmetic is done on `Decimal` at full precision. Values are only
//! rounded (2 decimal places, half away from zero) when presented.

use rust_decimal::prelude::*;

/// Decimal places kept when a value is presented
pub const DECIMAL_PLACES: u32 = 2;

/// Round a Decimal for presentation (2 decimal places, half away from zero)
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_decimal_precision() {
        // Classic floating point problem: 0.1 + 0.2 != 0.3
        let sum_f64 = 0.1_f64 + 0.2_f64;
        assert_ne!(sum_f64, 0.3);
        assert_eq!(dec!(0.1) + dec!(0.2), dec!(0.3));
    }

    #[test]
    fn test_round_money_negative() {
        assert_eq!(round_money(dec!(-10.005)), dec!(-10.01));
    }

    #[test]
    fn test_round_money_half_away_from_zero() {
        assert_eq!(round_money(dec!(10.005)), dec!(10.01));
        assert_eq!(round_money(dec!(10.004)), dec!(10.00));
        assert_eq!(round_money(dec!(499.1)), dec!(499.10));
    }

    #[test]
    fn test_accumulation_precision() {
        let mut total = Decimal::ZERO;
        for _ in 0..1000 {
            total += dec!(0.01);
        }
        assert_eq!(total, dec!(10.00));
    }
}
