use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A promo code and the fractional discount it grants (0.10 = 10%).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromoCode {
    pub code: String,
    pub discount: Decimal,
}

impl PromoCode {
    pub fn new(
        code: impl Into<String>,
        discount: Decimal,
    ) -> Self {
        Self {
            code: code.into(),
            discount,
        }
    }

    /// Exact match after trimming, ignoring case.
    pub fn matches(
        &self,
        input: &str,
    ) -> bool {
        let input = input.trim();
        !input.is_empty() && input.to_uppercase() == self.code.trim().to_uppercase()
    }
}
