pub mod booking_page;
pub mod gallery;
pub mod nav;
pub mod package_table;

pub use booking_page::BookingPage;
pub use gallery::{Gallery, GalleryEvent, GalleryImage, GalleryLayout, ModalState};
pub use nav::{NavAction, NavBar, NavLink};
pub use package_table::{PackageRow, PackageTable};
