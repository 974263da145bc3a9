//! Whole-page fade-in after load.

use std::time::Duration;

use crate::dom::Element;

/// Default delay between hiding the body and starting the fade.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(50);

const TRANSITION: &str = "opacity 0.4s ease";

/// Fades the document body in once per page load.
#[derive(Debug, Clone)]
pub struct PageFade<E> {
    body: E,
    delay: Duration,
}

impl<E: Element> PageFade<E> {
    pub fn new(body: E) -> Self {
        Self {
            body,
            delay: DEFAULT_DELAY,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// How long to wait between [`PageFade::hide`] and [`PageFade::show`].
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Make the body fully transparent.
    pub fn hide(&self) {
        self.body.set_style("opacity", "0");
    }

    /// Declare the transition and fade to opaque.
    pub fn show(&self) {
        self.body.set_style("transition", TRANSITION);
        self.body.set_style("opacity", "1");
    }
}
