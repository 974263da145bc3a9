//! Brochure Core Library
//!
//! DOM-agnostic controllers for the interactive parts of a static marketing
//! site: page routing, the mobile menu, stat counters, the scroll-linked
//! navbar, fade-in reveals, the page-load fade, button ripples, the contact
//! form and the service-dependent form fields.
//!
//! Every controller is generic over the element traits in [`dom`], so the
//! same logic runs against the live document (see `brochure-wasm`) and
//! against in-memory elements in tests.

pub mod config;
pub mod contact;
pub mod counter;
pub mod dom;
pub mod error;
pub mod fade;
pub mod menu;
pub mod navbar;
pub mod reveal;
pub mod ripple;
pub mod router;
pub mod service;

#[cfg(test)]
pub(crate) mod testing;

pub use config::SiteConfig;
pub use contact::{ContactForm, FormMessages, FormPayload, FormPhase, Transport, TransportResponse};
pub use counter::{CounterAnimation, CounterFrame, CounterRun, CounterTarget, StatCounter};
pub use dom::{Control, Element, Form, Viewport};
pub use error::{Result, SiteError};
pub use fade::PageFade;
pub use menu::{ClickOrigin, MobileMenu};
pub use navbar::NavbarStyler;
pub use reveal::FadeReveal;
pub use ripple::{Rect, Ripple};
pub use router::{NavLink, PageRouter};
pub use service::ServiceFields;
