use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, de};

/// Largest nightly rate or package base price accepted from a config or
/// package file.
pub const MAX_PRICE: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Whether `price` lies in `0..=MAX_PRICE`.
pub fn is_price_in_range(price: Decimal) -> bool {
    price >= Decimal::ZERO && price <= MAX_PRICE
}

/// Deserializes a price, rejecting negative values and values above
/// [`MAX_PRICE`].
pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let price = <Decimal as Deserialize>::deserialize(deserializer)?;
    if is_price_in_range(price) {
        Ok(price)
    } else {
        Err(de::Error::custom(format!(
            "price {price} is outside 0..={MAX_PRICE}"
        )))
    }
}
