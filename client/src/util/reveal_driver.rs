//! Binds `RevealTracker` to an intersection observer and runs counters.
//!
//! ARCHITECTURE
//! ============
//! The observer reports every entry per batch. The tracker admits each
//! intersecting index once and assigns its cascade delay; the driver schedules the
//! component's reveal callback and disconnects the observer once every
//! element has started.

#![cfg(feature = "hydrate")]

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

use crate::state::counter::CounterAnimation;
use crate::state::reveal::{RevealGroup, RevealTracker};
use crate::util::{dom, frame, observer};

/// Observe elements matching `selector` under `container`. `on_reveal` runs
/// once per element index, after that element's cascade delay.
pub fn install(
    container: &web_sys::Element,
    selector: &str,
    group: RevealGroup,
    on_reveal: impl Fn(usize) + 'static,
) {
    install_elements(dom::query_all(container, selector), group, on_reveal);
}

/// Observe `elements` directly; each must carry its `data-reveal-index`.
pub fn install_elements(elements: Vec<web_sys::Element>, group: RevealGroup, on_reveal: impl Fn(usize) + 'static) {
    if elements.is_empty() {
        return;
    }
    let tracker = Rc::new(RefCell::new(RevealTracker::new(group, elements.len())));
    let handle: Rc<RefCell<Option<web_sys::IntersectionObserver>>> = Rc::new(RefCell::new(None));
    let on_reveal = Rc::new(on_reveal);

    let batch_tracker = Rc::clone(&tracker);
    let batch_handle = Rc::clone(&handle);
    let created = observer::observe(&elements, group.options(), move |batch| {
        let scheduled = batch_tracker.borrow_mut().admit_batch(&batch);
        for reveal in scheduled {
            let on_reveal = Rc::clone(&on_reveal);
            frame::after(reveal.delay_ms, move || (*on_reveal)(reveal.index));
        }
        if batch_tracker.borrow().all_started() {
            if let Some(obs) = batch_handle.borrow_mut().take() {
                obs.disconnect();
            }
        }
    });
    *handle.borrow_mut() = created;
}

/// Drive `animation` one step per frame into `text` until it finishes.
pub fn run_counter(mut animation: CounterAnimation, text: RwSignal<String>) {
    frame::frame_loop(move || {
        let next = animation.step();
        let done = next.done;
        text.try_set(next.text).is_none() && !done
    });
}
