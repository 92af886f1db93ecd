//! Scroll listener feeding `ScrollState`.
//!
//! SYSTEM CONTEXT
//! ==============
//! One window `scroll` listener, coalesced to at most one update per
//! animation frame by `FrameGate`. Each update samples geometry, applies it
//! to the shared `ScrollState` signal, and collapses the mobile menu.

#![cfg(feature = "hydrate")]

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

use crate::state::nav::NavState;
use crate::state::scroll::{FrameGate, INITIAL_TICK_MS, ScrollState};
use crate::util::{dom, frame, viewport};

pub fn install(scroll: RwSignal<ScrollState>, nav: RwSignal<NavState>) {
    let gate = Rc::new(RefCell::new(FrameGate::default()));
    dom::listen_window("scroll", move |_| {
        if !gate.borrow_mut().request() {
            return;
        }
        let gate = Rc::clone(&gate);
        frame::request_frame(move || {
            update(scroll, nav);
            gate.borrow_mut().complete();
        });
    });
    frame::after(INITIAL_TICK_MS, move || update(scroll, nav));
}

fn update(scroll: RwSignal<ScrollState>, nav: RwSignal<NavState>) {
    let Some(metrics) = viewport::scroll_metrics() else {
        return;
    };
    let spans = viewport::section_spans();
    scroll.update(|s| {
        s.apply(metrics, &spans);
    });
    if nav.get_untracked().menu_open {
        nav.update(NavState::close_menu);
    }
}
