//! Common utility functions for price calculations.
//!
//! This module provides shared functionality used by the booking estimator
//! and the package table, including cent rounding and stay length.

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded up to 0.01 (away from zero).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use travel_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(2231.254)), dec!(2231.25));
/// assert_eq!(round_half_up(dec!(2231.255)), dec!(2231.26));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an amount with exactly two fraction digits, without a currency sign.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use travel_core::calculations::common::format_amount;
///
/// assert_eq!(format_amount(dec!(4860)), "4860.00");
/// assert_eq!(format_amount(dec!(1039.5)), "1039.50");
/// ```
pub fn format_amount(value: Decimal) -> String {
    let mut rounded = round_half_up(value);
    rounded.rescale(2);
    rounded.to_string()
}

/// Number of whole nights between two dates.
///
/// Returns 0 when either date is missing or check-out is not after check-in.
pub fn nights_between(
    check_in: Option<NaiveDate>,
    check_out: Option<NaiveDate>,
) -> u32 {
    match (check_in, check_out) {
        (Some(check_in), Some(check_out)) => {
            u32::try_from((check_out - check_in).num_days()).unwrap_or(0)
        }
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn date(
        y: i32,
        m: u32,
        d: u32,
    ) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    // =========================================================================
    // round_half_up tests
    // =========================================================================

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
    }

    #[test]
    fn round_half_up_preserves_already_rounded_values() {
        assert_eq!(round_half_up(dec!(4860.00)), dec!(4860.00));
    }

    // =========================================================================
    // format_amount tests
    // =========================================================================

    #[test]
    fn format_amount_pads_whole_numbers() {
        assert_eq!(format_amount(dec!(4500)), "4500.00");
    }

    #[test]
    fn format_amount_pads_single_fraction_digit() {
        assert_eq!(format_amount(dec!(1039.5)), "1039.50");
    }

    #[test]
    fn format_amount_trims_extra_fraction_digits() {
        assert_eq!(format_amount(dec!(4860.0000)), "4860.00");
        assert_eq!(format_amount(dec!(10.005)), "10.01");
    }

    #[test]
    fn format_amount_handles_zero() {
        assert_eq!(format_amount(Decimal::ZERO), "0.00");
    }

    // =========================================================================
    // nights_between tests
    // =========================================================================

    #[test]
    fn nights_between_counts_whole_days() {
        assert_eq!(nights_between(date(2024, 6, 1), date(2024, 6, 4)), 3);
    }

    #[test]
    fn nights_between_crosses_month_and_leap_day() {
        assert_eq!(nights_between(date(2024, 2, 28), date(2024, 3, 1)), 2);
    }

    #[test]
    fn nights_between_same_day_is_zero() {
        assert_eq!(nights_between(date(2024, 6, 1), date(2024, 6, 1)), 0);
    }

    #[test]
    fn nights_between_inverted_is_zero() {
        assert_eq!(nights_between(date(2024, 6, 4), date(2024, 6, 1)), 0);
    }

    #[test]
    fn nights_between_missing_date_is_zero() {
        assert_eq!(nights_between(None, date(2024, 6, 4)), 0);
        assert_eq!(nights_between(date(2024, 6, 1), None), 0);
        assert_eq!(nights_between(None, None), 0);
    }
}
