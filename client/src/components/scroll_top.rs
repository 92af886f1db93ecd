//! Back-to-top button wrapped in a scroll progress ring.

use leptos::prelude::*;

use crate::components::header::anchor_click;
use crate::state::scroll::{PROGRESS_RING_RADIUS, ScrollState, ring_circumference};

#[component]
pub fn ScrollTop() -> impl IntoView {
    let scroll = expect_context::<RwSignal<ScrollState>>();
    let circumference = ring_circumference();
    let offset = move || scroll.with(|s| s.view.stroke_offset).to_string();
    let visible = move || scroll.with(|s| s.view.sticky);

    view! {
        <a href="#home" class="scroll-top" class:show=visible on:click=anchor_click("home")>
            <svg class="progress-ring" width="50" height="50">
                <circle
                    id="progressCircle"
                    cx="25"
                    cy="25"
                    r=PROGRESS_RING_RADIUS.to_string()
                    stroke-dasharray=circumference.to_string()
                    style:stroke-dashoffset=offset
                ></circle>
            </svg>
            <i class="bx bx-up-arrow-alt"></i>
        </a>
    }
}
