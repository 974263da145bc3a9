//! Scroll-triggered fade-in reveals.

use crate::dom::Element;

const HIDDEN_OPACITY: &str = "0";
const HIDDEN_TRANSFORM: &str = "translateY(30px)";
const SHOWN_OPACITY: &str = "1";
const SHOWN_TRANSFORM: &str = "translateY(0)";
const TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";

/// An element that fades and slides in once it enters the viewport.
///
/// The reveal is one-way: nothing in this controller hides the element
/// again after [`FadeReveal::reveal`].
#[derive(Debug, Clone)]
pub struct FadeReveal<E> {
    element: E,
}

impl<E: Element> FadeReveal<E> {
    /// Wrap `element` and put it into its hidden starting state.
    pub fn prepare(element: E) -> Self {
        element.set_style("opacity", HIDDEN_OPACITY);
        element.set_style("transform", HIDDEN_TRANSFORM);
        element.set_style("transition", TRANSITION);
        Self { element }
    }

    pub fn element(&self) -> &E {
        &self.element
    }

    /// Visibility changed; only entering the viewport has an effect.
    pub fn on_intersection(&self, intersecting: bool) {
        if intersecting {
            self.reveal();
        }
    }

    pub fn reveal(&self) {
        self.element.set_style("opacity", SHOWN_OPACITY);
        self.element.set_style("transform", SHOWN_TRANSFORM);
    }
}
