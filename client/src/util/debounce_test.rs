use super::*;

#[test]
fn only_last_trigger_fires() {
    let mut debouncer = Debouncer::default();
    let a = debouncer.bump();
    let b = debouncer.bump();
    let c = debouncer.bump();
    assert!(!debouncer.fire(a));
    assert!(!debouncer.fire(b));
    assert!(debouncer.fire(c));
}

#[test]
fn single_trigger_fires() {
    let mut debouncer = Debouncer::default();
    let token = debouncer.bump();
    assert!(debouncer.fire(token));
}
