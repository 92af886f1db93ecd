//! Thin web-sys helpers shared by the page glue.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every lookup returns `Option` so a missing window, document, or element
//! disables only the feature that asked for it.

#![cfg(feature = "hydrate")]

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

pub fn window() -> Option<web_sys::Window> {
    web_sys::window()
}

pub fn document() -> Option<web_sys::Document> {
    window().and_then(|w| w.document())
}

pub fn body() -> Option<web_sys::HtmlElement> {
    document().and_then(|d| d.body())
}

/// Attach a page-lifetime listener to `window`.
pub fn listen_window(event: &str, handler: impl FnMut(web_sys::Event) + 'static) {
    let Some(window) = window() else {
        return;
    };
    listen(&window, event, handler);
}

/// Attach a page-lifetime listener to `document`.
pub fn listen_document(event: &str, handler: impl FnMut(web_sys::Event) + 'static) {
    let Some(document) = document() else {
        return;
    };
    listen(&document, event, handler);
}

/// Attach a listener that lives as long as `target`.
pub fn listen(target: &web_sys::EventTarget, event: &str, handler: impl FnMut(web_sys::Event) + 'static) {
    let cb = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    if target
        .add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
        .is_err()
    {
        leptos::logging::warn!("listener not attached: {event}");
        return;
    }
    cb.forget();
}

/// Run `f` once the window `load` event has fired (immediately if it
/// already has).
pub fn on_load(f: impl FnOnce() + 'static) {
    let loaded = document().is_some_and(|d| d.ready_state() == "complete");
    if loaded {
        f();
        return;
    }
    let mut pending = Some(f);
    listen_window("load", move |_| {
        if let Some(f) = pending.take() {
            f();
        }
    });
}

/// All elements under `root` matching `selector`, in document order.
pub fn query_all(root: &web_sys::Element, selector: &str) -> Vec<web_sys::Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .collect()
}

/// Parse a numeric `data-*` attribute.
pub fn data_index(el: &web_sys::Element, attr: &str) -> Option<usize> {
    el.get_attribute(attr)?.parse().ok()
}

pub fn viewport_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// `true` when the primary pointer can hover (desktop).
pub fn prefers_hover() -> bool {
    window()
        .and_then(|w| w.match_media("(hover: hover)").ok().flatten())
        .is_some_and(|mq| mq.matches())
}

pub fn set_body_overflow(value: &str) {
    if let Some(body) = body() {
        let _ = body.style().set_property("overflow", value);
    }
}

/// Blocking browser alert.
pub fn alert(message: &str) {
    if let Some(window) = window() {
        let _ = window.alert_with_message(message);
    }
}

pub fn open_in_new_tab(url: &str) {
    if let Some(window) = window() {
        if window.open_with_url_and_target(url, "_blank").is_err() {
            leptos::logging::warn!("could not open {url}");
        }
    }
}

/// Uniform random value in `[0, 1)`.
pub fn random() -> f64 {
    js_sys::Math::random()
}
