//! Window and section geometry sampling for the scroll coordinator.

#![cfg(feature = "hydrate")]

use wasm_bindgen::JsCast;

use crate::state::scroll::{ScrollMetrics, SectionSpan};
use crate::util::dom;

/// Sample scroll offset, document height, and viewport height.
pub fn scroll_metrics() -> Option<ScrollMetrics> {
    let window = dom::window()?;
    let document_height = window
        .document()
        .and_then(|d| d.document_element())
        .map_or(0.0, |el| f64::from(el.scroll_height()));
    Some(ScrollMetrics {
        scroll_y: window.scroll_y().unwrap_or(0.0),
        document_height,
        viewport_height: window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0),
    })
}

/// Geometry of every `section[id]`, in document order.
pub fn section_spans() -> Vec<SectionSpan> {
    let Some(root) = dom::document().and_then(|d| d.document_element()) else {
        return Vec::new();
    };
    dom::query_all(&root, "section[id]")
        .into_iter()
        .filter_map(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        .map(|el| SectionSpan {
            id: el.id(),
            top: f64::from(el.offset_top()),
            height: f64::from(el.offset_height()),
        })
        .collect()
}

/// Document-relative top of the section with `id`.
pub fn section_top(id: &str) -> Option<f64> {
    let el = dom::document()?.get_element_by_id(id)?;
    let el = el.dyn_into::<web_sys::HtmlElement>().ok()?;
    Some(f64::from(el.offset_top()))
}

/// Smooth-scroll the window to `top`.
pub fn smooth_scroll_to(top: f64) {
    let Some(window) = dom::window() else {
        return;
    };
    let opts = web_sys::ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&opts);
}
