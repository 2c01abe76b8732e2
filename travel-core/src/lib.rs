pub mod calculations;
pub mod models;

pub use calculations::{BookingEstimator, ValidationReport, final_price, validate};
pub use models::*;
