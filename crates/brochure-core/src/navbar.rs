//! Scroll-linked navbar styling.

use crate::dom::Element;

/// Class applied while the page is scrolled past the threshold.
pub const SCROLLED_CLASS: &str = "scrolled";

/// Default vertical offset in pixels.
pub const DEFAULT_THRESHOLD: f64 = 50.0;

/// Applies the `scrolled` class to the navbar based on scroll offset.
///
/// Runs on every scroll event; there is no throttling.
#[derive(Debug, Clone)]
pub struct NavbarStyler<E> {
    navbar: E,
    threshold: f64,
}

impl<E: Element> NavbarStyler<E> {
    pub fn new(navbar: E) -> Self {
        Self {
            navbar,
            threshold: DEFAULT_THRESHOLD,
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Style for the given vertical offset. Strictly greater than the
    /// threshold counts as scrolled.
    pub fn on_scroll(&self, offset: f64) {
        self.navbar.set_class(SCROLLED_CLASS, offset > self.threshold);
    }

    pub fn is_scrolled(&self) -> bool {
        self.navbar.has_class(SCROLLED_CLASS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeElement;

    #[test]
    fn test_scroll_past_threshold() {
        let styler = NavbarStyler::new(FakeElement::with_id("navbar"));

        styler.on_scroll(51.0);
        assert!(styler.is_scrolled());

        styler.on_scroll(0.0);
        assert!(!styler.is_scrolled());
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let styler = NavbarStyler::new(FakeElement::new());

        styler.on_scroll(50.0);
        assert!(!styler.is_scrolled());

        styler.on_scroll(50.5);
        assert!(styler.is_scrolled());
    }

    #[test]
    fn test_every_event_is_applied() {
        let navbar = FakeElement::new();
        let styler = NavbarStyler::new(navbar.clone()).with_threshold(10.0);

        for (offset, expected) in [(5.0, false), (11.0, true), (11.0, true), (9.0, false)] {
            styler.on_scroll(offset);
            assert_eq!(navbar.has_class(SCROLLED_CLASS), expected, "offset {offset}");
        }
    }
}
