//! Mobile navigation menu.

use crate::dom::Element;

/// Class marking the menu panel and its toggle as open.
pub const OPEN_CLASS: &str = "active";

/// Where a document-level click landed relative to the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOrigin {
    /// Inside the navigation panel.
    Panel,
    /// Inside the toggle control.
    Toggle,
    /// Anywhere else.
    Outside,
}

/// The navigation panel shown on small viewports and the control that
/// toggles it.
///
/// Open state lives on the elements themselves (the `active` class on both),
/// so clones of a `MobileMenu` always agree.
#[derive(Debug, Clone)]
pub struct MobileMenu<E> {
    panel: E,
    toggle: E,
}

impl<E: Element> MobileMenu<E> {
    /// Create a menu controller; only meaningful when both elements exist.
    pub fn new(panel: E, toggle: E) -> Self {
        Self { panel, toggle }
    }

    pub fn panel(&self) -> &E {
        &self.panel
    }

    pub fn toggle_control(&self) -> &E {
        &self.toggle
    }

    /// Whether the panel is currently shown.
    pub fn is_open(&self) -> bool {
        self.panel.has_class(OPEN_CLASS)
    }

    /// Flip the open state of the panel and the toggle.
    ///
    /// Each element is flipped on its own, matching the markup contract where
    /// both carry the class together.
    pub fn toggle(&self) -> bool {
        let open = self.panel.toggle_class(OPEN_CLASS);
        self.toggle.toggle_class(OPEN_CLASS);
        log::debug!("mobile menu {}", if open { "opened" } else { "closed" });
        open
    }

    pub fn close(&self) {
        self.panel.remove_class(OPEN_CLASS);
        self.toggle.remove_class(OPEN_CLASS);
    }

    /// React to a click anywhere in the document.
    ///
    /// Clicks on the toggle never reach here in the browser (the toggle
    /// handler stops propagation), but they are treated as inside anyway.
    pub fn on_document_click(&self, origin: ClickOrigin) {
        if origin == ClickOrigin::Outside {
            self.close();
        }
    }
}
