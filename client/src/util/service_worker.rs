//! Optional service worker registration for offline/installable support.
//!
//! Registration failure (or no support) is not an error for the page.

/// Script path served by the static asset handler.
pub const SERVICE_WORKER_PATH: &str = "/service-worker.js";

/// Register the service worker when the browser supports it.
pub fn register() {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let navigator = window.navigator();
        let supported = js_sys::Reflect::has(&navigator, &wasm_bindgen::JsValue::from_str("serviceWorker"))
            .unwrap_or(false);
        if !supported {
            return;
        }
        let promise = navigator.service_worker().register(SERVICE_WORKER_PATH);
        leptos::task::spawn_local(async move {
            if let Err(e) = wasm_bindgen_futures::JsFuture::from(promise).await {
                leptos::logging::log!("service worker not registered: {e:?}");
            }
        });
    }
}
