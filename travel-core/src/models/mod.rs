mod booking_form;
mod catalog;
mod price_estimate;
mod price_limit;
mod pricing_config;
mod promo_code;
mod tour_package;

pub use booking_form::{BookingFormState, FormField};
pub use catalog::{DestinationRate, PackageCatalogEntry};
pub use price_estimate::{ESTIMATE_PLACEHOLDER, PriceEstimate};
pub use price_limit::{MAX_PRICE, is_price_in_range};
pub use pricing_config::PricingConfig;
pub use promo_code::PromoCode;
pub use tour_package::{Season, TourPackage};
