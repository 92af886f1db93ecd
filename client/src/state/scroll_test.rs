use super::*;

fn metrics(scroll_y: f64) -> ScrollMetrics {
    ScrollMetrics { scroll_y, document_height: 3000.0, viewport_height: 800.0 }
}

fn spans() -> Vec<SectionSpan> {
    vec![
        SectionSpan { id: "home".to_owned(), top: 0.0, height: 800.0 },
        SectionSpan { id: "about".to_owned(), top: 800.0, height: 600.0 },
        SectionSpan { id: "contact".to_owned(), top: 1400.0, height: 1600.0 },
    ]
}

// =============================================================
// progress
// =============================================================

#[test]
fn progress_is_zero_at_top() {
    assert_eq!(metrics(0.0).progress_percent(), 0.0);
}

#[test]
fn progress_is_hundred_at_bottom() {
    assert_eq!(metrics(2200.0).progress_percent(), 100.0);
}

#[test]
fn progress_is_proportional_in_between() {
    assert!((metrics(1100.0).progress_percent() - 50.0).abs() < 1e-9);
}

#[test]
fn progress_clamps_overscroll() {
    assert_eq!(metrics(-40.0).progress_percent(), 0.0);
    assert_eq!(metrics(2500.0).progress_percent(), 100.0);
}

#[test]
fn progress_is_zero_when_page_cannot_scroll() {
    let short = ScrollMetrics { scroll_y: 0.0, document_height: 600.0, viewport_height: 800.0 };
    assert_eq!(short.progress_percent(), 0.0);
    let exact = ScrollMetrics { scroll_y: 0.0, document_height: 800.0, viewport_height: 800.0 };
    assert_eq!(exact.progress_percent(), 0.0);
}

#[test]
fn stroke_offset_spans_full_ring() {
    assert!((stroke_offset(0.0) - ring_circumference()).abs() < 1e-9);
    assert!(stroke_offset(100.0).abs() < 1e-9);
}

// =============================================================
// sticky / parallax
// =============================================================

#[test]
fn sticky_only_past_threshold() {
    assert!(!metrics(100.0).is_sticky());
    assert!(metrics(100.5).is_sticky());
}

#[test]
fn parallax_tracks_scroll_inside_first_viewport() {
    assert_eq!(metrics(100.0).parallax_offset(), Some(30.0));
    assert_eq!(metrics(800.0).parallax_offset(), None);
}

// =============================================================
// active section
// =============================================================

#[test]
fn active_section_applies_lookahead() {
    let spans = spans();
    assert_eq!(active_section(&spans, 0.0), Some("home"));
    assert_eq!(active_section(&spans, 699.0), Some("home"));
    assert_eq!(active_section(&spans, 700.0), Some("about"));
}

#[test]
fn active_section_first_match_wins_on_overlap() {
    let spans = vec![
        SectionSpan { id: "a".to_owned(), top: 0.0, height: 1000.0 },
        SectionSpan { id: "b".to_owned(), top: 200.0, height: 1000.0 },
    ];
    assert_eq!(active_section(&spans, 500.0), Some("a"));
}

#[test]
fn active_section_none_past_all_spans() {
    assert_eq!(active_section(&spans(), 5000.0), None);
}

// =============================================================
// ScrollState
// =============================================================

#[test]
fn apply_keeps_previous_section_when_nothing_matches() {
    let mut state = ScrollState::default();
    state.apply(metrics(800.0), &spans());
    assert_eq!(state.view.active_section.as_deref(), Some("about"));
    state.apply(metrics(800.0), &[]);
    assert_eq!(state.view.active_section.as_deref(), Some("about"));
}

#[test]
fn apply_holds_parallax_after_home_leaves_view() {
    let mut state = ScrollState::default();
    state.apply(metrics(500.0), &spans());
    assert_eq!(state.view.parallax_offset, 150.0);
    state.apply(metrics(1200.0), &spans());
    assert_eq!(state.view.parallax_offset, 150.0);
}

#[test]
fn apply_sets_progress_and_sticky_together() {
    let mut state = ScrollState::default();
    let view = state.apply(metrics(2200.0), &spans()).clone();
    assert_eq!(view.progress, 100.0);
    assert!(view.sticky);
    assert!(view.stroke_offset.abs() < 1e-9);
}

#[test]
fn activate_overrides_active_section() {
    let mut state = ScrollState::default();
    state.activate("projects");
    assert_eq!(state.view.active_section.as_deref(), Some("projects"));
}

// =============================================================
// FrameGate
// =============================================================

#[test]
fn frame_gate_coalesces_until_complete() {
    let mut gate = FrameGate::default();
    assert!(gate.request());
    assert!(!gate.request());
    assert!(!gate.request());
    assert!(gate.in_flight());
    gate.complete();
    assert!(gate.request());
}
