//! Click ripple on generic buttons.

use std::time::Duration;

use crate::dom::Element;

/// Class of the transient ripple overlay.
pub const RIPPLE_CLASS: &str = "ripple";

/// Default ripple lifetime.
pub const DEFAULT_LIFETIME: Duration = Duration::from_millis(600);

/// A bounding rectangle in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Geometry of a ripple, relative to its button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    /// Diameter, the larger of the button's width and height.
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl Ripple {
    /// Center a ripple on the click point `(client_x, client_y)`.
    pub fn at(button: Rect, client_x: f64, client_y: f64) -> Self {
        let size = button.width.max(button.height);
        Self {
            size,
            left: client_x - button.left - size / 2.0,
            top: client_y - button.top - size / 2.0,
        }
    }

    /// Whether `button` gets a ripple. Page navigation buttons are left to
    /// the router.
    pub fn applies_to<E: Element>(button: &E, page_attribute: &str) -> bool {
        !button.has_attribute(page_attribute)
    }

    /// Style a freshly created overlay element.
    pub fn apply<E: Element>(&self, overlay: &E) {
        let size = px(self.size);
        overlay.set_style("width", &size);
        overlay.set_style("height", &size);
        overlay.set_style("left", &px(self.left));
        overlay.set_style("top", &px(self.top));
        overlay.set_class_name(RIPPLE_CLASS);
    }
}

fn px(value: f64) -> String {
    if value == 0.0 {
        "0px".to_string()
    } else {
        format!("{value}px")
    }
}
