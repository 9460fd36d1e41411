//! Common helpers for presenting calculated amounts.
//!
//! Calculations never round. These functions are applied by callers when an
//! amount or rate is shown to a user.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded up to 0.01 (away from zero).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use fee_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(17352.225)), dec!(17352.23));
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Converts a rate fraction into a percentage with trailing zeros removed.
///
/// ```
/// use rust_decimal_macros::dec;
/// use fee_core::calculations::common::as_percentage;
///
/// assert_eq!(as_percentage(dec!(0.3074)).to_string(), "30.74");
/// assert_eq!(as_percentage(dec!(0.08)).to_string(), "8");
/// ```
pub fn as_percentage(rate: Decimal) -> Decimal {
    (rate * Decimal::ONE_HUNDRED).normalize()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // round_half_up tests
    // =========================================================================

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        let result = round_half_up(dec!(123.454));

        assert_eq!(result, dec!(123.45));
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        let result = round_half_up(dec!(17352.225));

        assert_eq!(result, dec!(17352.23));
    }

    #[test]
    fn round_half_up_handles_negative_values() {
        let result = round_half_up(dec!(-123.455));

        assert_eq!(result, dec!(-123.46));
    }

    #[test]
    fn round_half_up_keeps_one_decimal_value() {
        let result = round_half_up(dec!(120280.8));

        assert_eq!(result, dec!(120280.80));
    }

    #[test]
    fn round_half_up_handles_large_values() {
        let result = round_half_up(dec!(999999.999));

        assert_eq!(result, dec!(1000000.00));
    }

    // =========================================================================
    // as_percentage tests
    // =========================================================================

    #[test]
    fn as_percentage_scales_fraction() {
        assert_eq!(as_percentage(dec!(0.3074)), dec!(30.74));
        assert_eq!(as_percentage(dec!(0.06)), dec!(6));
    }

    #[test]
    fn as_percentage_drops_trailing_zeros() {
        assert_eq!(as_percentage(dec!(0.030)).to_string(), "3");
    }

    #[test]
    fn as_percentage_handles_zero() {
        assert_eq!(as_percentage(dec!(0)).to_string(), "0");
    }
}
