//! Pricing and validation logic for the booking site.
//!
//! This module provides the booking price estimator, the package table
//! price calculator and the booking form validator.

pub mod booking_estimate;
pub mod common;
pub mod package_pricing;
pub mod validation;

pub use booking_estimate::BookingEstimator;
pub use package_pricing::{final_price, weekend_surcharge};
pub use validation::{ValidationReport, is_valid_email, is_valid_name, validate};
