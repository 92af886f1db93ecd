//! Full-page loading overlay.
//!
//! After the window `load` event the overlay holds briefly, fades, and then
//! hides. The shared `PreloaderPhase` signal reaching `Hidden` is what starts
//! the page animations.

use leptos::prelude::*;

use crate::state::preloader::PreloaderPhase;

#[component]
pub fn Preloader() -> impl IntoView {
    let phase = expect_context::<RwSignal<PreloaderPhase>>();

    #[cfg(feature = "hydrate")]
    Effect::new(move |_| {
        crate::util::dom::on_load(move || advance(phase));
    });

    view! {
        <div id="preloader" class=move || phase.get().class()>
            <div class="loader"></div>
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn advance(phase: RwSignal<PreloaderPhase>) {
    if let Some((next, delay_ms)) = phase.get_untracked().next() {
        crate::util::frame::after(delay_ms, move || {
            if phase.try_set(next).is_none() {
                advance(phase);
            }
        });
    }
}
