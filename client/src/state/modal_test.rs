use super::*;

#[test]
fn default_is_closed_with_scroll_unlocked() {
    let modal = ModalState::default();
    assert!(!modal.is_open());
    assert_eq!(modal.body_overflow(), "auto");
}

#[test]
fn open_locks_body_scroll() {
    let mut modal = ModalState::default();
    modal.open();
    assert!(modal.is_open());
    assert_eq!(modal.body_overflow(), "hidden");
}

#[test]
fn auto_close_dismisses_current_open() {
    let mut modal = ModalState::default();
    let token = modal.open();
    assert!(modal.auto_close(token));
    assert!(!modal.is_open());
}

#[test]
fn stale_auto_close_leaves_reopened_modal() {
    let mut modal = ModalState::default();
    let first = modal.open();
    modal.close();
    let _second = modal.open();
    assert!(!modal.auto_close(first));
    assert!(modal.is_open());
}

#[test]
fn manual_close_then_auto_close_is_noop() {
    let mut modal = ModalState::default();
    let token = modal.open();
    modal.close();
    assert!(!modal.auto_close(token));
}
