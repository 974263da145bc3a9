//! Event listener and intersection observer plumbing.
//!
//! Listeners live for the whole page, so their closures are leaked with
//! `Closure::forget` once registered.

use brochure_core::SiteError;
use wasm_bindgen::{JsCast, JsValue, prelude::Closure};
use web_sys::{
    Event, EventTarget, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::dom::dom_error;

/// Register `handler` for `event` on `target` for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), SiteError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(dom_error)?;

    // Leak the closure to keep it alive
    closure.forget();
    Ok(())
}

/// Observe `targets`, calling `on_entry` for every intersection change once
/// at least `threshold` of a target is visible (or stops being so).
pub fn observe<'a, F>(
    targets: impl IntoIterator<Item = &'a web_sys::Element>,
    threshold: f64,
    mut on_entry: F,
) -> Result<IntersectionObserver, SiteError>
where
    F: FnMut(&IntersectionObserverEntry) + 'static,
{
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    on_entry(&entry);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(dom_error)?;
    callback.forget();

    for target in targets {
        observer.observe(target);
    }
    Ok(observer)
}
