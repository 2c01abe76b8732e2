use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{DestinationRate, PackageCatalogEntry, PromoCode};

/// Rates, surcharges and promo codes used by the booking estimator.
///
/// `Default` is the built-in price list of the site. Every field can be
/// overridden independently when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Packages matched by exact label.
    pub catalog: Vec<PackageCatalogEntry>,

    /// Destination fragments, checked in order when no label matches.
    pub destinations: Vec<DestinationRate>,

    /// Nightly rate when neither the package nor the destination is known.
    #[serde(deserialize_with = "super::price_limit::deserialize")]
    pub fallback_rate: Decimal,

    /// Parties larger than this pay the group surcharge.
    pub group_size_threshold: u32,

    /// Fractional surcharge for large parties (0.20 = 20%).
    pub group_surcharge: Decimal,

    pub promo_codes: Vec<PromoCode>,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            catalog: vec![
                PackageCatalogEntry::new("Beach Paradise", Decimal::from(1200)),
                PackageCatalogEntry::new("Romantic Getaway", Decimal::from(1500)),
                PackageCatalogEntry::new("Luxury Escape", Decimal::from(1100)),
                PackageCatalogEntry::new("Cultural Journey", Decimal::from(1700)),
            ],
            destinations: vec![
                DestinationRate::new("bali", Decimal::from(1200)),
                DestinationRate::new("paris", Decimal::from(1500)),
                DestinationRate::new("dubai", Decimal::from(1100)),
                DestinationRate::new("tokyo", Decimal::from(1700)),
            ],
            fallback_rate: Decimal::from(1000),
            group_size_threshold: 2,
            group_surcharge: Decimal::new(20, 2),
            promo_codes: vec![
                PromoCode::new("EARLYBIRD", Decimal::new(10, 2)),
                PromoCode::new("SUMMER", Decimal::new(5, 2)),
                PromoCode::new("FALLSALE", Decimal::new(15, 2)),
            ],
        }
    }
}
