//! Typed/deleted headline cycling through the role phrases.
//!
//! SYSTEM CONTEXT
//! ==============
//! Starts once the preloader is gone. Exactly one timeout is pending at any
//! time: it lives in a `TimerSlot`, and every tick carries the animator's
//! generation token so a tick from an earlier `start` is dropped.

use leptos::prelude::*;

use crate::content::PHRASES;
use crate::state::preloader::PreloaderPhase;
use crate::state::typing::TypingAnimator;

#[component]
pub fn TypingText() -> impl IntoView {
    let preloader = expect_context::<RwSignal<PreloaderPhase>>();
    let animator = RwSignal::new(TypingAnimator::new(PHRASES));
    let text = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    {
        use crate::state::typing::START_DELAY_MS;
        use crate::util::dom;
        use crate::util::frame::TimerSlot;

        let slot = TimerSlot::new();
        let unload_slot = slot.clone();
        dom::listen_window("beforeunload", move |_| unload_slot.clear());

        Effect::new(move |started: Option<bool>| {
            if started == Some(true) || !preloader.get().animations_ready() {
                return started.unwrap_or(false);
            }
            if let Some(token) = animator.try_update(TypingAnimator::start) {
                schedule(animator, text, slot.clone(), token, START_DELAY_MS);
            }
            true
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = preloader;
    }

    on_cleanup(move || {
        animator.try_update(TypingAnimator::stop);
    });

    view! {
        <div class="text-animate">
            <h3>{move || text.get()}</h3>
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn schedule(
    animator: RwSignal<TypingAnimator>,
    text: RwSignal<String>,
    slot: crate::util::frame::TimerSlot,
    token: crate::state::typing::TypingToken,
    delay_ms: u32,
) {
    let next_slot = slot.clone();
    slot.schedule(delay_ms, move || {
        let Some(frame) = animator.try_update(|a| a.tick(token)).flatten() else {
            return;
        };
        if text.try_set(frame.text).is_none() {
            schedule(animator, text, next_slot, token, frame.delay_ms);
        }
    });
}
