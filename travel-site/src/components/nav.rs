//! Site navigation bar.

/// Page loaded when the path names no file.
pub const DEFAULT_PAGE: &str = "index.html";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub href: String,
    pub label: String,
    pub active: bool,
}

impl NavLink {
    pub fn new(
        href: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            href: href.into(),
            label: label.into(),
            active: false,
        }
    }

    /// In-page anchor such as `#contact`.
    pub fn is_anchor(&self) -> bool {
        self.href.starts_with('#')
    }
}

/// What the page should do after a navigation link is clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavAction {
    /// Suppress the default jump and smooth-scroll to the element with this id.
    SmoothScroll { target: String },
    /// Suppress the default jump; there is nothing to scroll to.
    Stay,
    /// Let the browser follow the link.
    Follow,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavBar {
    links: Vec<NavLink>,
}

impl NavBar {
    pub fn new(links: Vec<NavLink>) -> Self {
        Self { links }
    }

    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    /// Marks the link pointing at the page in `path` as active and clears
    /// the rest.
    pub fn activate(
        &mut self,
        path: &str,
    ) {
        let current = current_page(path);
        for link in &mut self.links {
            link.active = link.href == current;
        }
    }

    pub fn active_link(&self) -> Option<&NavLink> {
        self.links.iter().find(|link| link.active)
    }

    /// Decides how a click on `href` is handled.
    pub fn click(
        &self,
        href: &str,
    ) -> NavAction {
        match href.strip_prefix('#') {
            Some("") => NavAction::Stay,
            Some(target) => NavAction::SmoothScroll {
                target: target.to_string(),
            },
            None => NavAction::Follow,
        }
    }
}

/// File name of the page at `path` (`/site/packages.html` → `packages.html`).
pub fn current_page(path: &str) -> &str {
    match path.rsplit('/').next() {
        Some(name) if !name.is_empty() => name,
        _ => DEFAULT_PAGE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn site_nav() -> NavBar {
        NavBar::new(vec![
            NavLink::new("index.html", "Home"),
            NavLink::new("packages.html", "Packages"),
            NavLink::new("booking.html", "Booking"),
            NavLink::new("gallery.html", "Gallery"),
            NavLink::new("#contact", "Contact"),
        ])
    }

    #[test]
    fn current_page_takes_last_segment() {
        assert_eq!(current_page("/travel/packages.html"), "packages.html");
        assert_eq!(current_page("gallery.html"), "gallery.html");
    }

    #[test]
    fn current_page_defaults_to_index() {
        assert_eq!(current_page("/"), "index.html");
        assert_eq!(current_page("/travel/"), "index.html");
        assert_eq!(current_page(""), "index.html");
    }

    #[test]
    fn activate_marks_matching_link_only() {
        let mut nav = site_nav();

        nav.activate("/travel/booking.html");

        let active: Vec<&str> = nav
            .links()
            .iter()
            .filter(|l| l.active)
            .map(|l| l.label.as_str())
            .collect();
        assert_eq!(active, vec!["Booking"]);
    }

    #[test]
    fn activate_root_path_marks_home() {
        let mut nav = site_nav();

        nav.activate("/");

        assert_eq!(nav.active_link().map(|l| l.label.as_str()), Some("Home"));
    }

    #[test]
    fn activate_clears_previous_active_link() {
        let mut nav = site_nav();
        nav.activate("packages.html");

        nav.activate("gallery.html");

        assert_eq!(
            nav.active_link().map(|l| l.href.as_str()),
            Some("gallery.html")
        );
        assert_eq!(nav.links().iter().filter(|l| l.active).count(), 1);
    }

    #[test]
    fn activate_unknown_page_leaves_nothing_active() {
        let mut nav = site_nav();
        nav.activate("packages.html");

        nav.activate("about.html");

        assert_eq!(nav.active_link(), None);
    }

    #[test]
    fn click_anchor_smooth_scrolls() {
        let nav = site_nav();

        assert_eq!(
            nav.click("#contact"),
            NavAction::SmoothScroll {
                target: "contact".to_string()
            }
        );
        assert!(nav.links()[4].is_anchor());
    }

    #[test]
    fn click_bare_hash_stays() {
        assert_eq!(site_nav().click("#"), NavAction::Stay);
    }

    #[test]
    fn click_page_link_follows() {
        assert_eq!(site_nav().click("packages.html"), NavAction::Follow);
    }
}
