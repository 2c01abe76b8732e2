//! Image gallery with a modal viewer and a grid/list layout toggle.

use tracing::warn;

/// A thumbnail in the gallery grid.
///
/// Empty `large` or `title` mean the attribute is absent; [`Gallery::new`]
/// fills them from `src` and `alt`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
    pub title: String,
    pub large: String,
}

impl GalleryImage {
    pub fn new(
        src: impl Into<String>,
        alt: impl Into<String>,
    ) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
            ..Default::default()
        }
    }

    pub fn with_title(
        mut self,
        title: impl Into<String>,
    ) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_large(
        mut self,
        large: impl Into<String>,
    ) -> Self {
        self.large = large.into();
        self
    }

    fn normalized(mut self) -> Self {
        if self.large.is_empty() {
            self.large = self.src.clone();
        }
        if self.title.is_empty() {
            self.title = self.alt.clone();
        }
        self
    }

    /// Caption shown under the enlarged image: the title, else the alt text.
    pub fn caption(&self) -> &str {
        if self.title.is_empty() {
            &self.alt
        } else {
            &self.title
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalState {
    pub open: bool,
    pub image_src: String,
    pub image_alt: String,
    pub caption: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GalleryLayout {
    #[default]
    Grid,
    List,
}

impl GalleryLayout {
    /// Extra CSS class on the gallery grid for this layout.
    pub fn css_class(&self) -> Option<&'static str> {
        match self {
            Self::Grid => None,
            Self::List => Some("gallery-list"),
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Grid => Self::List,
            Self::List => Self::Grid,
        }
    }
}

/// User interactions the gallery reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryEvent {
    ThumbnailClicked(usize),
    CloseClicked,
    /// Click on the dimmed area around the modal content.
    BackdropClicked,
    /// Click inside the modal content (image, caption).
    ContentClicked,
    /// Key name as reported by the browser, e.g. `Escape`.
    KeyDown(String),
    ToggleLayoutClicked,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Gallery {
    images: Vec<GalleryImage>,
    modal: ModalState,
    layout: GalleryLayout,
    scroll_locked: bool,
}

impl Gallery {
    pub fn new(images: Vec<GalleryImage>) -> Self {
        Self {
            images: images.into_iter().map(GalleryImage::normalized).collect(),
            ..Default::default()
        }
    }

    pub fn images(&self) -> &[GalleryImage] {
        &self.images
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    pub fn layout(&self) -> GalleryLayout {
        self.layout
    }

    /// Whether page scrolling is disabled behind the open modal.
    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    pub fn handle(
        &mut self,
        event: GalleryEvent,
    ) {
        match event {
            GalleryEvent::ThumbnailClicked(index) => self.open(index),
            GalleryEvent::CloseClicked | GalleryEvent::BackdropClicked => self.close(),
            GalleryEvent::KeyDown(key) if key == "Escape" => self.close(),
            GalleryEvent::KeyDown(_) | GalleryEvent::ContentClicked => {}
            GalleryEvent::ToggleLayoutClicked => self.layout = self.layout.toggled(),
        }
    }

    fn open(
        &mut self,
        index: usize,
    ) {
        let Some(image) = self.images.get(index) else {
            warn!(index, count = self.images.len(), "no gallery image at index");
            return;
        };

        self.modal = ModalState {
            open: true,
            image_src: image.large.clone(),
            image_alt: image.alt.clone(),
            caption: image.caption().to_string(),
        };
        self.scroll_locked = true;
    }

    fn close(&mut self) {
        self.modal.open = false;
        self.modal.image_src.clear();
        self.scroll_locked = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn gallery() -> Gallery {
        Gallery::new(vec![
            GalleryImage::new("img/bali-thumb.jpg", "Bali beach")
                .with_large("img/bali.jpg")
                .with_title("Sunset over Kuta"),
            GalleryImage::new("img/paris.jpg", "Eiffel Tower"),
            GalleryImage::new("img/dubai.jpg", ""),
        ])
    }

    #[test]
    fn new_fills_missing_large_and_title() {
        let gallery = gallery();

        let paris = &gallery.images()[1];
        assert_eq!(paris.large, "img/paris.jpg");
        assert_eq!(paris.title, "Eiffel Tower");

        let bali = &gallery.images()[0];
        assert_eq!(bali.large, "img/bali.jpg");
        assert_eq!(bali.title, "Sunset over Kuta");
    }

    #[test]
    fn thumbnail_click_opens_modal_with_large_image() {
        let mut gallery = gallery();

        gallery.handle(GalleryEvent::ThumbnailClicked(0));

        assert_eq!(
            gallery.modal(),
            &ModalState {
                open: true,
                image_src: "img/bali.jpg".to_string(),
                image_alt: "Bali beach".to_string(),
                caption: "Sunset over Kuta".to_string(),
            }
        );
        assert!(gallery.is_scroll_locked());
    }

    #[test]
    fn caption_falls_back_to_alt() {
        let mut gallery = gallery();

        gallery.handle(GalleryEvent::ThumbnailClicked(1));

        assert_eq!(gallery.modal().caption, "Eiffel Tower");
    }

    #[test]
    fn close_button_closes_modal() {
        let mut gallery = gallery();
        gallery.handle(GalleryEvent::ThumbnailClicked(0));

        gallery.handle(GalleryEvent::CloseClicked);

        assert!(!gallery.modal().open);
        assert_eq!(gallery.modal().image_src, "");
        assert!(!gallery.is_scroll_locked());
    }

    #[test]
    fn backdrop_click_closes_but_content_click_does_not() {
        let mut gallery = gallery();
        gallery.handle(GalleryEvent::ThumbnailClicked(1));

        gallery.handle(GalleryEvent::ContentClicked);
        assert!(gallery.modal().open);

        gallery.handle(GalleryEvent::BackdropClicked);
        assert!(!gallery.modal().open);
    }

    #[test]
    fn escape_closes_and_other_keys_are_ignored() {
        let mut gallery = gallery();
        gallery.handle(GalleryEvent::ThumbnailClicked(2));

        gallery.handle(GalleryEvent::KeyDown("Enter".to_string()));
        assert!(gallery.modal().open);

        gallery.handle(GalleryEvent::KeyDown("Escape".to_string()));
        assert!(!gallery.modal().open);
    }

    #[test]
    fn out_of_range_thumbnail_is_ignored() {
        let mut gallery = gallery();

        gallery.handle(GalleryEvent::ThumbnailClicked(7));

        assert_eq!(gallery.modal(), &ModalState::default());
        assert!(!gallery.is_scroll_locked());
    }

    #[test]
    fn toggle_switches_layout_back_and_forth() {
        let mut gallery = gallery();
        assert_eq!(gallery.layout(), GalleryLayout::Grid);
        assert_eq!(gallery.layout().css_class(), None);

        gallery.handle(GalleryEvent::ToggleLayoutClicked);
        assert_eq!(gallery.layout(), GalleryLayout::List);
        assert_eq!(gallery.layout().css_class(), Some("gallery-list"));

        gallery.handle(GalleryEvent::ToggleLayoutClicked);
        assert_eq!(gallery.layout(), GalleryLayout::Grid);
    }
}
