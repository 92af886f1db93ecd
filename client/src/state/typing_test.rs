use super::*;

fn animator() -> TypingAnimator {
    TypingAnimator::new(["ab", "xyz"])
}

// =============================================================
// cycle
// =============================================================

#[test]
fn types_one_char_per_tick_then_pauses_full() {
    let mut anim = animator();
    let token = anim.start();

    let first = anim.tick(token).unwrap();
    assert_eq!(first.text, "a");
    assert_eq!(first.phase, TypingPhase::Typing);
    assert_eq!(first.delay_ms, TYPE_DELAY_MS);

    let second = anim.tick(token).unwrap();
    assert_eq!(second.text, "ab");
    assert_eq!(second.phase, TypingPhase::PausingFull);
    assert_eq!(second.delay_ms, FULL_PAUSE_MS);
}

#[test]
fn deletes_then_pauses_empty_and_advances_phrase() {
    let mut anim = animator();
    let token = anim.start();
    anim.tick(token);
    anim.tick(token);

    let deleting = anim.tick(token).unwrap();
    assert_eq!(deleting.text, "a");
    assert_eq!(deleting.phase, TypingPhase::Deleting);
    assert_eq!(deleting.delay_ms, DELETE_DELAY_MS);

    let empty = anim.tick(token).unwrap();
    assert_eq!(empty.text, "");
    assert_eq!(empty.phase, TypingPhase::PausingEmpty);
    assert_eq!(empty.delay_ms, EMPTY_PAUSE_MS);
    assert_eq!(anim.phrase_index(), 1);

    assert_eq!(anim.tick(token).unwrap().text, "x");
}

#[test]
fn phrase_index_wraps_after_last_phrase() {
    let mut anim = TypingAnimator::new(["a"]);
    let token = anim.start();
    anim.tick(token);
    anim.tick(token);
    assert_eq!(anim.phrase_index(), 0);
    assert_eq!(anim.tick(token).unwrap().text, "a");
}

#[test]
fn handles_multibyte_phrases_by_char() {
    let mut anim = TypingAnimator::new(["né"]);
    let token = anim.start();
    assert_eq!(anim.tick(token).unwrap().text, "n");
    assert_eq!(anim.tick(token).unwrap().text, "né");
}

// =============================================================
// ownership of the cycle
// =============================================================

#[test]
fn starting_twice_leaves_exactly_one_live_cycle() {
    let mut anim = animator();
    let first = anim.start();
    let second = anim.start();

    assert!(anim.tick(first).is_none());
    let frame = anim.tick(second).unwrap();
    assert_eq!(frame.text, "a");
    assert!(anim.tick(first).is_none());
    assert_eq!(anim.tick(second).unwrap().text, "ab");
}

#[test]
fn restart_resets_progress() {
    let mut anim = animator();
    let old = anim.start();
    anim.tick(old);
    let token = anim.start();
    assert_eq!(anim.tick(token).unwrap().text, "a");
}

#[test]
fn stop_invalidates_outstanding_token() {
    let mut anim = animator();
    let token = anim.start();
    anim.stop();
    assert!(!anim.is_current(token));
    assert!(anim.tick(token).is_none());
}

#[test]
fn empty_phrase_list_never_ticks() {
    let mut anim = TypingAnimator::new(Vec::<String>::new());
    let token = anim.start();
    assert!(anim.tick(token).is_none());
}
