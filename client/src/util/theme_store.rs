//! Theme persistence and application.
//!
//! Reads the preference from `localStorage` and applies a `data-theme`
//! attribute to `<body>`. Toggle writes back to `localStorage` and updates
//! that attribute. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort: when storage is unavailable the toggle still
//! applies for the current session. SSR paths no-op.

#[cfg(test)]
#[path = "theme_store_test.rs"]
mod theme_store_test;

use crate::state::theme::ThemePreference;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "theme";

/// Read the saved preference, defaulting to dark.
pub fn read_preference() -> ThemePreference {
    #[cfg(feature = "hydrate")]
    {
        let stored = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten());
        ThemePreference::parse(stored.as_deref())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        ThemePreference::default()
    }
}

/// Apply the `data-theme` attribute on `<body>`.
pub fn apply(pref: ThemePreference) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        {
            let _ = body.set_attribute("data-theme", pref.as_str());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = pref;
    }
}

/// Persist and apply `pref`.
pub fn set_preference(pref: ThemePreference) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            if storage.set_item(STORAGE_KEY, pref.as_str()).is_err() {
                leptos::logging::warn!("theme preference not persisted");
            }
        }
    }
    apply(pref);
}

/// Toggle the theme and persist the new preference.
pub fn toggle(current: ThemePreference) -> ThemePreference {
    let next = current.toggled();
    set_preference(next);
    next
}
