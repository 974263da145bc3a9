//! Single-page navigation between page sections.
//!
//! Navigation elements opt in with a page identifier attribute
//! (`data-page="services"`); the matching section is the element whose id
//! is the identifier plus a suffix (`services-page`).

use crate::{
    dom::{Element, Viewport},
    menu::MobileMenu,
};

/// Class marking the visible page and the highlighted link.
pub const ACTIVE_CLASS: &str = "active";

/// A navigation element and the page identifier it points at.
#[derive(Debug, Clone)]
pub struct NavLink<E> {
    /// Page identifier from the link's attribute.
    pub page: String,

    /// The link element.
    pub element: E,
}

impl<E> NavLink<E> {
    pub fn new(page: impl Into<String>, element: E) -> Self {
        Self {
            page: page.into(),
            element,
        }
    }
}

/// Router over the page sections captured at mount time.
#[derive(Debug)]
pub struct PageRouter<E, V> {
    pages: Vec<E>,
    links: Vec<NavLink<E>>,
    menu: Option<MobileMenu<E>>,
    viewport: V,
    page_suffix: String,
    current: Option<String>,
}

impl<E: Element, V: Viewport> PageRouter<E, V> {
    /// Create a router. The current page starts unset until the first
    /// navigation, even if the markup pre-activates a section.
    pub fn new(pages: Vec<E>, links: Vec<NavLink<E>>, viewport: V) -> Self {
        Self {
            pages,
            links,
            menu: None,
            viewport,
            page_suffix: "-page".to_string(),
            current: None,
        }
    }

    /// Close this menu on every navigation.
    pub fn with_menu(mut self, menu: MobileMenu<E>) -> Self {
        self.menu = Some(menu);
        self
    }

    /// Override the section id suffix.
    pub fn with_page_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.page_suffix = suffix.into();
        self
    }

    /// Identifier of the page made active by the last navigation.
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn links(&self) -> &[NavLink<E>] {
        &self.links
    }

    /// Section id for a page identifier.
    pub fn section_id(&self, page: &str) -> String {
        format!("{page}{}", self.page_suffix)
    }

    /// Show the page `page` and highlight its links.
    ///
    /// Every section is deactivated first. When no section matches, none is
    /// activated and link highlighting still follows `page`, so nothing ends
    /// up highlighted. Returns whether a section matched.
    pub fn navigate(&mut self, page: &str) -> bool {
        for section in &self.pages {
            section.remove_class(ACTIVE_CLASS);
        }

        let section_id = self.section_id(page);
        let target = self.pages.iter().find(|section| section.id() == section_id);
        let found = target.is_some();

        if let Some(section) = target {
            section.add_class(ACTIVE_CLASS);
        } else {
            log::debug!("no page section #{section_id}");
        }

        for link in &self.links {
            link.element.set_class(ACTIVE_CLASS, link.page == page);
        }

        self.viewport.scroll_to_top();

        if let Some(menu) = &self.menu {
            menu.close();
        }

        self.current = found.then(|| page.to_string());
        found
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::testing::{FakeElement, FakeViewport};

    struct Fixture {
        router: PageRouter<FakeElement, Rc<FakeViewport>>,
        viewport: Rc<FakeViewport>,
        pages: Vec<FakeElement>,
        links: Vec<FakeElement>,
        menu: MobileMenu<FakeElement>,
    }

    fn fixture() -> Fixture {
        let pages: Vec<FakeElement> = ["home-page", "services-page", "contact-page"]
            .into_iter()
            .map(|id| FakeElement::with_id(id).class("page"))
            .collect();
        pages[0].add_class(ACTIVE_CLASS);

        let link_targets = ["home", "services", "contact", "services", "about"];
        let links: Vec<FakeElement> = link_targets
            .iter()
            .map(|page| FakeElement::new().attr("data-page", page))
            .collect();
        let nav_links = link_targets
            .iter()
            .zip(&links)
            .map(|(page, element)| NavLink::new(*page, element.clone()))
            .collect();

        let menu = MobileMenu::new(FakeElement::new(), FakeElement::new());
        let viewport = Rc::new(FakeViewport::default());
        let router = PageRouter::new(pages.clone(), nav_links, viewport.clone())
            .with_menu(menu.clone());

        Fixture {
            router,
            viewport,
            pages,
            links,
            menu,
        }
    }

    fn active_pages(pages: &[FakeElement]) -> Vec<String> {
        pages
            .iter()
            .filter(|p| p.has_class(ACTIVE_CLASS))
            .map(|p| p.id())
            .collect()
    }

    #[test]
    fn test_navigate_activates_exactly_one_page() {
        let mut f = fixture();

        assert!(f.router.navigate("services"));

        assert_eq!(active_pages(&f.pages), vec!["services-page"]);
        assert_eq!(f.router.current(), Some("services"));
    }

    #[test]
    fn test_navigate_highlights_matching_links() {
        let mut f = fixture();
        f.links[0].add_class(ACTIVE_CLASS);

        f.router.navigate("services");

        let highlighted: Vec<bool> = f.links.iter().map(|l| l.has_class(ACTIVE_CLASS)).collect();
        assert_eq!(highlighted, vec![false, true, false, true, false]);
    }

    #[test]
    fn test_navigate_unknown_page_activates_nothing() {
        let mut f = fixture();
        f.router.navigate("home");

        // "about" has a link but no section.
        assert!(!f.router.navigate("about"));

        assert!(active_pages(&f.pages).is_empty());
        assert_eq!(f.router.current(), None);
        let highlighted: Vec<bool> = f.links.iter().map(|l| l.has_class(ACTIVE_CLASS)).collect();
        assert_eq!(highlighted, vec![false, false, false, false, true]);
    }

    #[test]
    fn test_navigate_without_any_match() {
        let mut f = fixture();

        assert!(!f.router.navigate("missing"));

        assert!(active_pages(&f.pages).is_empty());
        assert!(f.links.iter().all(|l| !l.has_class(ACTIVE_CLASS)));
    }

    #[test]
    fn test_section_outside_captured_pages_is_ignored() {
        let mut f = fixture();
        let stray = FakeElement::with_id("pricing-page");

        assert!(!f.router.navigate("pricing"));

        assert!(!stray.has_class(ACTIVE_CLASS));
        assert!(active_pages(&f.pages).is_empty());
        assert_eq!(f.router.current(), None);
    }

    #[test]
    fn test_navigate_scrolls_to_top_and_closes_menu() {
        let mut f = fixture();
        f.menu.toggle();
        assert!(f.menu.is_open());

        f.router.navigate("contact");

        assert_eq!(f.viewport.scrolls(), 1);
        assert!(!f.menu.is_open());
        assert!(!f.menu.toggle_control().has_class(ACTIVE_CLASS));
    }

    #[test]
    fn test_custom_page_suffix() {
        let section = FakeElement::with_id("pricing-section");
        let mut router = PageRouter::new(
            vec![section.clone()],
            Vec::new(),
            Rc::new(FakeViewport::default()),
        )
        .with_page_suffix("-section");

        assert!(router.navigate("pricing"));
        assert!(section.has_class(ACTIVE_CLASS));
    }
}
