//! `requestAnimationFrame` and timer scheduling.
//!
//! ARCHITECTURE
//! ============
//! `request_frame` runs a one-shot callback on the next animation frame and
//! `frame_loop` keeps re-requesting frames until its step reports done.
//! `TimerSlot` owns at most one pending `gloo_timers` timeout: scheduling
//! into the slot drops (and so cancels) whatever was pending before.

#![cfg(feature = "hydrate")]

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

/// Run `f` on the next animation frame. Falls back to running it
/// immediately when the frame cannot be requested.
pub fn request_frame(f: impl FnOnce() + 'static) {
    let pending = Rc::new(RefCell::new(Some(f)));
    let pending_cb = Rc::clone(&pending);
    let cb = Closure::once_into_js(move || {
        if let Some(f) = pending_cb.borrow_mut().take() {
            f();
        }
    });

    let scheduled = web_sys::window()
        .is_some_and(|w| w.request_animation_frame(cb.unchecked_ref()).is_ok());
    if !scheduled {
        if let Some(f) = pending.borrow_mut().take() {
            f();
        }
    }
}

/// Run `step` once per animation frame for as long as it returns `true`.
/// Stops (with a warning) if a frame cannot be requested.
pub fn frame_loop(mut step: impl FnMut() -> bool + 'static) {
    let cb = Closure::once_into_js(move || {
        if step() {
            frame_loop(step);
        }
    });
    let scheduled = web_sys::window()
        .is_some_and(|w| w.request_animation_frame(cb.unchecked_ref()).is_ok());
    if !scheduled {
        leptos::logging::warn!("animation frame unavailable; loop stopped");
    }
}

/// Fire-and-forget timeout.
pub fn after(delay_ms: u32, f: impl FnOnce() + 'static) {
    Timeout::new(delay_ms, f).forget();
}

/// Uniquely owned pending timeout.
#[derive(Clone, Default)]
pub struct TimerSlot {
    inner: Rc<RefCell<Option<Timeout>>>,
}

impl TimerSlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `f`, cancelling any timeout already pending in this slot.
    pub fn schedule(&self, delay_ms: u32, f: impl FnOnce() + 'static) {
        let timeout = Timeout::new(delay_ms, f);
        // The previous Timeout is dropped here, which clears it.
        self.inner.borrow_mut().replace(timeout);
    }

    /// Cancel the pending timeout, if any.
    pub fn clear(&self) {
        self.inner.borrow_mut().take();
    }
}
