//! Live price estimate for the booking form.
//!
//! The estimate is rebuilt from scratch on every form change:
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Nightly rate: catalog label, else destination pattern, else fallback |
//! | 2    | Nights between check-in and check-out (0 when unknown) |
//! | 3    | Base total = rate × max(1, nights) |
//! | 4    | Group surcharge when guests exceed the threshold |
//! | 5    | Promo discount |
//! | 6    | Round to cents, half-up |
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//! use travel_core::calculations::BookingEstimator;
//! use travel_core::{BookingFormState, PricingConfig};
//!
//! let config = PricingConfig::default();
//! let form = BookingFormState {
//!     check_in: NaiveDate::from_ymd_opt(2024, 6, 1),
//!     check_out: NaiveDate::from_ymd_opt(2024, 6, 4),
//!     guest_count: 3,
//!     promo_code: "EARLYBIRD".to_string(),
//!     package: "Romantic Getaway".to_string(),
//!     ..Default::default()
//! };
//!
//! let estimate = BookingEstimator::new(&config).estimate(&form);
//!
//! assert_eq!(estimate.total_amount, dec!(4860.00));
//! assert_eq!(estimate.display_text(), "Estimated total: $4860.00 (3 nights)");
//! ```

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::common::round_half_up;
use crate::{BookingFormState, PriceEstimate, PricingConfig};

/// Calculator for booking price estimates.
///
/// Borrows the pricing configuration so one config can back any number of
/// estimators.
#[derive(Debug, Clone)]
pub struct BookingEstimator<'a> {
    config: &'a PricingConfig,
}

impl<'a> BookingEstimator<'a> {
    pub fn new(config: &'a PricingConfig) -> Self {
        Self { config }
    }

    /// Estimates the price of the stay described by `form`.
    ///
    /// Never fails: unknown packages use the fallback rate, missing dates
    /// price a single night, and unknown promo codes give no discount.
    /// Totals beyond the `Decimal` range saturate.
    pub fn estimate(
        &self,
        form: &BookingFormState,
    ) -> PriceEstimate {
        let nightly_rate = self.nightly_rate(&form.package, &form.destination);
        let nights = form.nights();
        let base_total = self.base_total(nightly_rate, nights);
        let guest_factor = self.guest_factor(form.guest_count);
        let discount = self.promo_discount(&form.promo_code);

        let total_amount = round_half_up(
            base_total
                .saturating_mul(guest_factor)
                .saturating_mul(Decimal::ONE.saturating_sub(discount)),
        );

        debug!(
            %nightly_rate,
            nights,
            %guest_factor,
            %discount,
            %total_amount,
            "booking estimate"
        );

        PriceEstimate {
            nights,
            nightly_rate,
            guest_factor,
            discount,
            total_amount,
        }
    }

    /// Resolves the nightly rate for the selected package or destination.
    ///
    /// An exact catalog label on `package` wins. Otherwise the destination
    /// patterns are tried against `destination`, or against `package` when
    /// no destination is selected.
    pub fn nightly_rate(
        &self,
        package: &str,
        destination: &str,
    ) -> Decimal {
        let package = package.trim();

        if let Some(entry) = self.config.catalog.iter().find(|e| e.label == package) {
            return entry.nightly_base_rate;
        }

        let place = if destination.trim().is_empty() {
            package
        } else {
            destination
        };

        self.config
            .destinations
            .iter()
            .find(|d| d.matches(place))
            .map(|d| d.nightly_base_rate)
            .unwrap_or(self.config.fallback_rate)
    }

    /// Multiplier for the party size: 1 plus the group surcharge above the
    /// threshold, 1 otherwise.
    pub fn guest_factor(
        &self,
        guest_count: u32,
    ) -> Decimal {
        if guest_count > self.config.group_size_threshold {
            Decimal::ONE.saturating_add(self.config.group_surcharge)
        } else {
            Decimal::ONE
        }
    }

    /// Discount fraction for a promo code; 0 for unknown codes.
    pub fn promo_discount(
        &self,
        code: &str,
    ) -> Decimal {
        self.config
            .promo_codes
            .iter()
            .find(|p| p.matches(code))
            .map(|p| p.discount)
            .unwrap_or(Decimal::ZERO)
    }

    /// Rate times nights, charging at least one night.
    fn base_total(
        &self,
        nightly_rate: Decimal,
        nights: u32,
    ) -> Decimal {
        nightly_rate.saturating_mul(Decimal::from(nights.max(1)))
    }
}
