use tracing::{debug, info};
use travel_core::FormField;

use crate::{
    components::{BookingPage, Gallery, GalleryImage, NavBar, NavLink, PackageTable},
    config::SiteConfig,
};

/// The parts of a loaded page that the site script enhances.
///
/// `None` means the page does not contain that section.
#[derive(Debug, Clone, Default)]
pub struct PageDocument {
    pub path: String,
    pub nav_links: Option<Vec<NavLink>>,
    /// The page has a static package grid to replace with the pricing table.
    pub package_grid: bool,
    /// Initial field values of the booking form.
    pub booking_form: Option<Vec<(FormField, String)>>,
    pub gallery: Option<Vec<GalleryImage>>,
}

/// Live components attached to a page after enhancement.
#[derive(Debug, Clone, Default)]
pub struct EnhancedPage {
    pub nav: Option<NavBar>,
    pub package_table: Option<PackageTable>,
    pub booking: Option<BookingPage>,
    pub gallery: Option<Gallery>,
}

/// Runs every page enhancement that applies to `document`; sections the
/// page lacks are skipped.
pub fn enhance_page(
    document: &PageDocument,
    config: &SiteConfig,
) -> EnhancedPage {
    let nav = document.nav_links.as_ref().map(|links| {
        let mut nav = NavBar::new(links.clone());
        nav.activate(&document.path);
        debug!(
            active = nav.active_link().map(|l| l.href.as_str()),
            "navigation activated"
        );
        nav
    });

    let package_table = document
        .package_grid
        .then(|| PackageTable::new(config.packages.clone()));

    let booking = document.booking_form.as_ref().map(|values| {
        let mut values = values.clone();
        if !values.iter().any(|(field, _)| *field == FormField::Guests) {
            values.push((FormField::Guests, "1".to_string()));
        }
        BookingPage::with_values(config.pricing.clone(), values)
    });

    let gallery = document
        .gallery
        .as_ref()
        .map(|images| Gallery::new(images.clone()));

    info!(
        path = %document.path,
        nav = nav.is_some(),
        packages = package_table.is_some(),
        booking = booking.is_some(),
        gallery = gallery.is_some(),
        "page enhanced"
    );

    EnhancedPage {
        nav,
        package_table,
        booking,
        gallery,
    }
}
