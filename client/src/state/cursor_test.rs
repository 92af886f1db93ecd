use super::*;

#[test]
fn follower_eases_toward_pointer() {
    let mut cursor = CursorState::default();
    cursor.move_to(100.0, 50.0);
    cursor.step_follower();
    assert_eq!(cursor.follower, (20.0, 10.0));
    cursor.step_follower();
    assert!((cursor.follower.0 - 36.0).abs() < 1e-9);
}

#[test]
fn follower_converges() {
    let mut cursor = CursorState::default();
    cursor.move_to(300.0, 300.0);
    for _ in 0..200 {
        cursor.step_follower();
    }
    assert!((cursor.follower.0 - 300.0).abs() < 1e-6);
    assert!((cursor.follower.1 - 300.0).abs() < 1e-6);
}

#[test]
fn hover_changes_presentation() {
    let mut cursor = CursorState::default();
    assert_eq!(cursor.dot_class(), "cursor");
    cursor.hovering = true;
    assert_eq!(cursor.dot_class(), "cursor cursor-hover");
    assert!(cursor.follower_transform().ends_with("scale(0.5)"));
}
