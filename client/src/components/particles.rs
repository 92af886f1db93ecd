//! Decorative floating particle background.
//!
//! The particle set is generated on mount and regenerated after a debounced
//! resize, but only while the viewport is narrow.

use leptos::prelude::*;

use crate::util::particles::ParticleSpec;

#[component]
pub fn Particles() -> impl IntoView {
    let particles = RwSignal::new(Vec::<ParticleSpec>::new());

    #[cfg(feature = "hydrate")]
    Effect::new(move |_| {
        use std::cell::RefCell;
        use std::rc::Rc;

        use crate::util::debounce::{Debouncer, RESIZE_QUIET_MS};
        use crate::util::particles::{generate, is_narrow};
        use crate::util::{dom, frame};

        particles.set(generate(dom::viewport_width(), dom::random));

        let debouncer = Rc::new(RefCell::new(Debouncer::default()));
        dom::listen_window("resize", move |_| {
            let token = debouncer.borrow_mut().bump();
            let debouncer = Rc::clone(&debouncer);
            frame::after(RESIZE_QUIET_MS, move || {
                if !debouncer.borrow().fire(token) {
                    return;
                }
                let width = dom::viewport_width();
                if is_narrow(width) {
                    particles.set(generate(width, dom::random));
                }
            });
        });
    });

    view! {
        <div id="particles" class="particles">
            {move || {
                particles
                    .get()
                    .into_iter()
                    .map(|p| view! { <div class="particle" style=p.style()></div> })
                    .collect_view()
            }}
        </div>
    }
}
