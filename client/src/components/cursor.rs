//! Custom cursor dot with an eased follower ring.
//!
//! Only active on devices whose primary pointer can hover. The dot tracks
//! the pointer; the follower eases toward it every animation frame.

use leptos::prelude::*;

use crate::state::cursor::CursorState;

#[component]
pub fn Cursor() -> impl IntoView {
    let cursor = RwSignal::new(CursorState::default());
    let active = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    Effect::new(move |_| {
        use wasm_bindgen::JsCast;

        use crate::state::cursor::INTERACTIVE_SELECTOR;
        use crate::util::{dom, frame};

        if !dom::prefers_hover() {
            return;
        }
        active.set(true);

        dom::listen_document("mousemove", move |ev| {
            if let Some(ev) = ev.dyn_ref::<web_sys::MouseEvent>() {
                let (x, y) = (f64::from(ev.client_x()), f64::from(ev.client_y()));
                cursor.update(|c| c.move_to(x, y));
            }
        });

        let over_interactive = |ev: &web_sys::Event| {
            ev.target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                .and_then(|el| el.closest(INTERACTIVE_SELECTOR).ok().flatten())
                .is_some()
        };
        dom::listen_document("mouseover", move |ev| {
            if over_interactive(&ev) {
                cursor.update(|c| c.hovering = true);
            }
        });
        dom::listen_document("mouseout", move |ev| {
            if over_interactive(&ev) {
                cursor.update(|c| c.hovering = false);
            }
        });

        frame::frame_loop(move || cursor.try_update(CursorState::step_follower).is_some());
    });

    let dot_left = move || format!("{}px", cursor.with(|c| c.pointer.0));
    let dot_top = move || format!("{}px", cursor.with(|c| c.pointer.1));
    let follower_left = move || format!("{}px", cursor.with(|c| c.follower.0));
    let follower_top = move || format!("{}px", cursor.with(|c| c.follower.1));
    let display = move || if active.get() { "block" } else { "none" };

    view! {
        <div
            id="cursor"
            class=move || cursor.with(CursorState::dot_class)
            style:display=display
            style:left=dot_left
            style:top=dot_top
        ></div>
        <div
            id="cursorFollower"
            class="cursor-follower"
            style:display=display
            style:left=follower_left
            style:top=follower_top
            style:transform=move || cursor.with(CursorState::follower_transform)
        ></div>
    }
}
