//! Brochure WASM Runtime
//!
//! Browser entry point for the site script. On start it reads the optional
//! embedded configuration, sets up console logging and mounts every
//! behaviour whose elements are present in the document.
//!
//! # Example (HTML)
//!
//! ```html
//! <script type="application/json" id="brochure-config">
//!   { "form": { "success": "Thanks, we will be in touch." } }
//! </script>
//! <script type="module">
//!   import init, { navigate, checkService } from './pkg/brochure_wasm.js';
//!   await init();
//! </script>
//! ```

pub mod dom;
pub mod events;
pub mod site;
pub mod transport;

use std::cell::RefCell;

use brochure_core::{SiteConfig, SiteError};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

pub use dom::{DomElement, DomViewport};
pub use site::Site;
pub use transport::FetchTransport;

/// Id of the optional `<script type="application/json">` configuration block.
pub const CONFIG_ELEMENT_ID: &str = "brochure-config";

thread_local! {
    static SITE: RefCell<Option<Site>> = const { RefCell::new(None) };
}

/// Initialize the WASM module and mount the site behaviours.
///
/// Mounting waits for `DOMContentLoaded` when the document is still parsing.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let config = load_config(&document);
    if let Some(level) = config
        .as_ref()
        .map_or(log::LevelFilter::Info, SiteConfig::log_level)
        .to_level()
    {
        // Fails only if a logger is already installed.
        let _ = console_log::init_with_level(level);
    }
    let config = config.unwrap_or_else(|err| {
        log::warn!("ignoring site configuration: {err}");
        SiteConfig::default()
    });
    if config.parsed_log_level().is_none() {
        log::warn!("unknown log_level {:?}, using info", config.log_level);
    }

    if document.ready_state() == "loading" {
        let ready = document.clone();
        let mounted = events::listen(&document, "DOMContentLoaded", move |_| {
            mount(&window, &ready, &config);
        });
        if let Err(err) = mounted {
            log::warn!("cannot wait for DOMContentLoaded: {err}");
        }
    } else {
        mount(&window, &document, &config);
    }
}

fn mount(window: &Window, document: &Document, config: &SiteConfig) {
    let site = Site::mount(window, document, config);
    SITE.with(|slot| *slot.borrow_mut() = Some(site));
    log::info!("site interactions loaded");
}

/// Read the embedded configuration block, falling back to defaults when the
/// page has none.
pub fn load_config(document: &Document) -> Result<SiteConfig, SiteError> {
    match document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
    {
        Some(json) => SiteConfig::from_json(&json),
        None => Ok(SiteConfig::default()),
    }
}

/// Show the page section for `page`, as a click on a navigation link would.
///
/// Returns whether a section matched.
#[wasm_bindgen]
pub fn navigate(page: &str) -> bool {
    SITE.with(|slot| {
        slot.borrow()
            .as_ref()
            .is_some_and(|site| site.navigate(page))
    })
}

/// Re-sync the service-dependent form fields with the current selection.
///
/// Kept under this name so inline `onchange="checkService()"` markup works.
#[wasm_bindgen(js_name = checkService)]
pub fn check_service() {
    SITE.with(|slot| {
        if let Some(site) = slot.borrow().as_ref() {
            site.check_service();
        }
    });
}

/// Get the version of the site script.
#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Check whether the behaviours have been mounted.
#[wasm_bindgen(js_name = isReady)]
pub fn is_ready() -> bool {
    SITE.with(|slot| slot.borrow().is_some())
}
