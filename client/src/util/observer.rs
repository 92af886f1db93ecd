//! `IntersectionObserver` wiring for reveal animations.
//!
//! The observer reports each callback batch as the list of its entries, in
//! callback order, with the element index (from `data-reveal-index`) and
//! whether it is intersecting. Deciding what to animate is left to
//! `RevealTracker`.

#![cfg(feature = "hydrate")]

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::state::reveal::{ObservedEntry, ObserverOptions};
use crate::util::dom;

/// Attribute carrying an element's position within its observed collection.
pub const INDEX_ATTR: &str = "data-reveal-index";

/// Observe `elements`; `on_batch` receives every entry of each callback.
///
/// Returns the observer so callers can disconnect it once every element has
/// animated. `None` when the browser refuses to create one.
pub fn observe(
    elements: &[web_sys::Element],
    options: ObserverOptions,
    mut on_batch: impl FnMut(Vec<ObservedEntry>) + 'static,
) -> Option<web_sys::IntersectionObserver> {
    if elements.is_empty() {
        return None;
    }

    let cb = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
            let batch: Vec<ObservedEntry> = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<web_sys::IntersectionObserverEntry>().ok())
                .filter_map(|entry| {
                    let index = dom::data_index(&entry.target(), INDEX_ATTR)?;
                    Some(ObservedEntry { index, intersecting: entry.is_intersecting() })
                })
                .collect();
            if batch.iter().any(|entry| entry.intersecting) {
                on_batch(batch);
            }
        },
    );

    let init = web_sys::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(options.root_margin);

    let observer = match web_sys::IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &init) {
        Ok(observer) => observer,
        Err(e) => {
            leptos::logging::warn!("intersection observer unavailable: {e:?}");
            return None;
        }
    };
    cb.forget();

    for el in elements {
        observer.observe(el);
    }
    Some(observer)
}
