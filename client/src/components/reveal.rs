//! Shared wiring for sections whose content reveals on scroll.
//!
//! Sections render per-element flags from a `RwSignal<Vec<bool>>`; the
//! observer glue runs once the preloader is gone and the section node is
//! mounted.

use leptos::prelude::*;

/// One `false` flag per element.
pub fn flags(len: usize) -> RwSignal<Vec<bool>> {
    RwSignal::new(vec![false; len])
}

/// Reactive read of flag `index`.
pub fn flag(flags: RwSignal<Vec<bool>>, index: usize) -> impl Fn() -> bool + Copy + Send + Sync + 'static {
    move || flags.with(|f| f.get(index).copied().unwrap_or(false))
}

#[cfg(feature = "hydrate")]
pub fn raise(flags: RwSignal<Vec<bool>>, index: usize) {
    flags.update(|f| {
        if let Some(flag) = f.get_mut(index) {
            *flag = true;
        }
    });
}

/// Run `setup` once, with the section element, after the preloader hides.
#[cfg(feature = "hydrate")]
pub fn after_preloader(
    section: NodeRef<leptos::html::Section>,
    setup: impl FnOnce(&web_sys::Element) + 'static,
) {
    use crate::state::preloader::PreloaderPhase;

    let preloader = expect_context::<RwSignal<PreloaderPhase>>();
    let mut setup = Some(setup);
    Effect::new(move |_| {
        if !preloader.get().animations_ready() {
            return;
        }
        let Some(el) = section.get() else {
            return;
        };
        if let Some(setup) = setup.take() {
            setup(&el);
        }
    });
}
