use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::format_amount;

/// Text shown in the estimate box while no stay length is known.
pub const ESTIMATE_PLACEHOLDER: &str = "Estimated total: —";

/// Outcome of one booking price estimation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceEstimate {
    pub nights: u32,

    /// Resolved per-night price before surcharges and discounts.
    pub nightly_rate: Decimal,
    /// 1.0, or 1.0 plus the group surcharge for large parties.
    pub guest_factor: Decimal,
    /// Promo discount as a fraction.
    pub discount: Decimal,

    /// Final amount, rounded to cents.
    pub total_amount: Decimal,
}

impl PriceEstimate {
    /// An estimate is only shown once the stay covers at least one night.
    pub fn is_available(&self) -> bool {
        self.nights > 0
    }

    /// Text for the estimate box, e.g. `Estimated total: $4860.00 (3 nights)`.
    pub fn display_text(&self) -> String {
        if !self.is_available() {
            return ESTIMATE_PLACEHOLDER.to_string();
        }

        let unit = if self.nights == 1 { "night" } else { "nights" };
        format!(
            "Estimated total: ${} ({} {unit})",
            format_amount(self.total_amount),
            self.nights
        )
    }
}

impl fmt::Display for PriceEstimate {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(&self.display_text())
    }
}
