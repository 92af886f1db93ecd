//! Corner notification and the CV download button that raises it.

use leptos::prelude::*;

use crate::content::CV_URL;
use crate::state::toast::{CV_NOTICE, ToastPhase, ToastState, VISIBLE_MS};

#[component]
pub fn Toast() -> impl IntoView {
    let toast = expect_context::<RwSignal<ToastState>>();
    let shown = move || toast.with(|t| t.phase != ToastPhase::Gone);

    view! {
        <Show when=shown>
            <div class="notification" style:animation=move || toast.with(ToastState::animation)>
                {move || toast.with(|t| t.message.clone())}
            </div>
        </Show>
    }
}

/// Button that shows the download notice and opens the CV in a new tab.
#[component]
pub fn DownloadCv() -> impl IntoView {
    let toast = expect_context::<RwSignal<ToastState>>();

    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        let Some(token) = toast.try_update(|t| t.show(CV_NOTICE)) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            drive(toast, token, VISIBLE_MS);
            crate::util::dom::open_in_new_tab(CV_URL);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, VISIBLE_MS);
        }
    };

    view! {
        <a href=CV_URL id="downloadCV" class="btn" on:click=on_click>
            "Download CV"
        </a>
    }
}

#[cfg(feature = "hydrate")]
fn drive(toast: RwSignal<ToastState>, token: crate::state::toast::ToastToken, delay_ms: u32) {
    crate::util::frame::after(delay_ms, move || {
        if let Some(next) = toast.try_update(|t| t.advance(token)).flatten() {
            drive(toast, token, next);
        }
    });
}
