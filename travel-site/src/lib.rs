pub mod app;
pub mod components;
pub mod config;
pub mod csv_loader;
pub mod logging;
pub mod utils;

pub use app::{EnhancedPage, PageDocument, enhance_page};
pub use config::{SiteConfig, SiteConfigError};
