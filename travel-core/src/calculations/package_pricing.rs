//! Final prices for the package table.
//!
//! `final = base × season multiplier × (1 + weekend surcharge)`, rounded to
//! cents. The weekend surcharge is a flat 5% on packages of six days or
//! more; it depends on trip length only.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use travel_core::calculations::final_price;
//! use travel_core::{Season, TourPackage};
//!
//! let tokyo = TourPackage {
//!     id: 4,
//!     destination: "Tokyo, Japan".to_string(),
//!     duration_days: 8,
//!     base_price: dec!(1700),
//!     season: Season::Peak,
//! };
//!
//! assert_eq!(final_price(&tokyo), dec!(2231.25));
//! ```

use rust_decimal::Decimal;

use crate::TourPackage;
use crate::calculations::common::round_half_up;

/// Packages at least this long pay the weekend surcharge.
pub const WEEKEND_SURCHARGE_MIN_DAYS: u32 = 6;

/// Weekend surcharge fraction for a trip of `duration_days`.
pub fn weekend_surcharge(duration_days: u32) -> Decimal {
    if duration_days >= WEEKEND_SURCHARGE_MIN_DAYS {
        Decimal::new(5, 2)
    } else {
        Decimal::ZERO
    }
}

/// Final advertised price of a package. Saturates at `Decimal::MAX`.
pub fn final_price(package: &TourPackage) -> Decimal {
    round_half_up(
        package
            .base_price
            .saturating_mul(package.season.multiplier())
            .saturating_mul(Decimal::ONE + weekend_surcharge(package.duration_days)),
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::Season;

    fn package(
        duration_days: u32,
        base_price: Decimal,
        season: Season,
    ) -> TourPackage {
        TourPackage {
            id: 1,
            destination: "Somewhere".to_string(),
            duration_days,
            base_price,
            season,
        }
    }

    // =========================================================================
    // weekend_surcharge tests
    // =========================================================================

    #[test]
    fn weekend_surcharge_starts_at_six_days() {
        assert_eq!(weekend_surcharge(5), Decimal::ZERO);
        assert_eq!(weekend_surcharge(6), dec!(0.05));
        assert_eq!(weekend_surcharge(14), dec!(0.05));
    }

    #[test]
    fn weekend_surcharge_zero_for_day_trip() {
        assert_eq!(weekend_surcharge(0), Decimal::ZERO);
    }

    // =========================================================================
    // final_price tests
    // =========================================================================

    #[test]
    fn final_price_default_catalog() {
        let prices: Vec<Decimal> = TourPackage::default_catalog()
            .iter()
            .map(final_price)
            .collect();

        assert_eq!(
            prices,
            vec![dec!(1575.00), dec!(1650.00), dec!(1039.50), dec!(2231.25)]
        );
    }

    #[test]
    fn final_price_unknown_season_uses_base_multiplier() {
        let result = final_price(&package(3, dec!(1000), Season::parse("holiday")));

        assert_eq!(result, dec!(1000.00));
    }

    #[test]
    fn final_price_rounds_half_up() {
        // 999.99 × 0.90 × 1.05 = 944.99055
        let result = final_price(&package(6, dec!(999.99), Season::Off));

        assert_eq!(result, dec!(944.99));
    }

    #[test]
    fn final_price_shoulder_short_trip() {
        let result = final_price(&package(5, dec!(1500), Season::Shoulder));

        assert_eq!(result, dec!(1650.00));
    }

    #[test]
    fn final_price_saturates_instead_of_overflowing() {
        let result = final_price(&package(
            8,
            dec!(70000000000000000000000000000),
            Season::Peak,
        ));

        assert_eq!(result, Decimal::MAX);
    }
}
