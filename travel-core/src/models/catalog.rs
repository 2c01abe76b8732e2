use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A named package on the booking form with its per-night price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageCatalogEntry {
    pub label: String,
    #[serde(deserialize_with = "super::price_limit::deserialize")]
    pub nightly_base_rate: Decimal,
}

impl PackageCatalogEntry {
    pub fn new(
        label: impl Into<String>,
        nightly_base_rate: Decimal,
    ) -> Self {
        Self {
            label: label.into(),
            nightly_base_rate,
        }
    }
}

/// A destination name fragment and the per-night price it implies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestinationRate {
    pub pattern: String,
    #[serde(deserialize_with = "super::price_limit::deserialize")]
    pub nightly_base_rate: Decimal,
}

impl DestinationRate {
    pub fn new(
        pattern: impl Into<String>,
        nightly_base_rate: Decimal,
    ) -> Self {
        Self {
            pattern: pattern.into(),
            nightly_base_rate,
        }
    }

    /// Case-insensitive substring match. An empty pattern matches nothing.
    pub fn matches(
        &self,
        value: &str,
    ) -> bool {
        !self.pattern.is_empty() && value.to_lowercase().contains(&self.pattern.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn destination_matches_substring_ignoring_case() {
        let rate = DestinationRate::new("tokyo", dec!(1700));

        assert!(rate.matches("Tokyo, Japan"));
        assert!(rate.matches("TOKYO"));
        assert!(rate.matches("greater tokyo area"));
    }

    #[test]
    fn destination_does_not_match_other_names() {
        let rate = DestinationRate::new("paris", dec!(1500));

        assert!(!rate.matches("Dubai, UAE"));
        assert!(!rate.matches(""));
    }

    #[test]
    fn empty_pattern_matches_nothing() {
        let rate = DestinationRate::new("", dec!(1));

        assert!(!rate.matches("Bali"));
    }
}
