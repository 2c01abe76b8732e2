use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Travel season of a tour package.
///
/// Parsed case-insensitively, so `PEAK` and `peak` are the same season and
/// both display as `Peak`. Anything unrecognised is kept verbatim as
/// [`Season::Other`] and priced at the base rate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Season {
    Peak,
    Shoulder,
    Off,
    Other(String),
}

impl Season {
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "peak" => Self::Peak,
            "shoulder" => Self::Shoulder,
            "off" => Self::Off,
            _ => Self::Other(s.trim().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Peak => "peak",
            Self::Shoulder => "shoulder",
            Self::Off => "off",
            Self::Other(s) => s,
        }
    }

    /// Price multiplier applied to the package base price.
    pub fn multiplier(&self) -> Decimal {
        match self {
            Self::Peak => Decimal::new(125, 2),
            Self::Shoulder => Decimal::new(110, 2),
            Self::Off => Decimal::new(90, 2),
            Self::Other(_) => Decimal::ONE,
        }
    }

    /// Display label with the first letter upper-cased ("Peak", "Shoulder").
    pub fn label(&self) -> String {
        let s = self.as_str();
        let mut chars = s.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl From<String> for Season {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<Season> for String {
    fn from(season: Season) -> Self {
        season.as_str().to_string()
    }
}

impl fmt::Display for Season {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// A row of the package pricing table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TourPackage {
    pub id: u32,
    pub destination: String,
    pub duration_days: u32,
    #[serde(deserialize_with = "super::price_limit::deserialize")]
    pub base_price: Decimal,
    pub season: Season,
}

impl TourPackage {
    /// The packages shown on the site when no other list is configured.
    pub fn default_catalog() -> Vec<TourPackage> {
        vec![
            TourPackage {
                id: 1,
                destination: "Bali, Indonesia".to_string(),
                duration_days: 7,
                base_price: Decimal::from(1200),
                season: Season::Peak,
            },
            TourPackage {
                id: 2,
                destination: "Paris, France".to_string(),
                duration_days: 5,
                base_price: Decimal::from(1500),
                season: Season::Shoulder,
            },
            TourPackage {
                id: 3,
                destination: "Dubai, UAE".to_string(),
                duration_days: 6,
                base_price: Decimal::from(1100),
                season: Season::Off,
            },
            TourPackage {
                id: 4,
                destination: "Tokyo, Japan".to_string(),
                duration_days: 8,
                base_price: Decimal::from(1700),
                season: Season::Peak,
            },
        ]
    }
}
