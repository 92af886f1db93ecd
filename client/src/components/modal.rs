//! Thank-you modal shown after a successful contact submission.
//!
//! Closes on the close button, a click on the backdrop, `Escape`, or by
//! itself after a few seconds. Body scrolling is locked while it is open.

use leptos::prelude::*;

use crate::state::modal::ModalState;

/// Open the modal and schedule its auto-close.
pub fn open(modal: RwSignal<ModalState>) {
    let Some(token) = modal.try_update(ModalState::open) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    crate::util::frame::after(crate::state::modal::AUTO_CLOSE_MS, move || {
        modal.try_update(|m| m.auto_close(token));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = token;
}

#[component]
pub fn ThankYouModal() -> impl IntoView {
    let modal = expect_context::<RwSignal<ModalState>>();

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        use crate::util::dom;

        Effect::new(move |_| {
            dom::set_body_overflow(modal.with(ModalState::body_overflow));
        });

        dom::listen_document("keydown", move |ev| {
            let is_escape = ev
                .dyn_ref::<web_sys::KeyboardEvent>()
                .is_some_and(|k| k.key() == "Escape");
            if is_escape && modal.with_untracked(ModalState::is_open) {
                modal.update(ModalState::close);
            }
        });
    }

    let on_backdrop = move |ev: leptos::ev::MouseEvent| {
        if ev.target() == ev.current_target() {
            modal.update(ModalState::close);
        }
    };
    let on_close = move |_| modal.update(ModalState::close);

    view! {
        <div id="thankYouModal" class="modal" class:show=move || modal.with(ModalState::is_open) on:click=on_backdrop>
            <div class="modal-content">
                <button class="modal-close" aria-label="Close" on:click=on_close>
                    <i class="bx bx-x"></i>
                </button>
                <i class="bx bx-check-circle modal-icon"></i>
                <h3>"Thank You!"</h3>
                <p>"Your message has been sent successfully. I'll get back to you soon."</p>
            </div>
        </div>
    }
}
