use super::*;

// =============================================================
// RevealGroup
// =============================================================

#[test]
fn card_groups_share_bottom_margin() {
    for group in [RevealGroup::Skills, RevealGroup::Timeline, RevealGroup::Experience, RevealGroup::Achievements] {
        let opts = group.options();
        assert_eq!(opts.threshold, 0.1);
        assert_eq!(opts.root_margin, "0px 0px -50px 0px");
    }
}

#[test]
fn stat_groups_use_own_thresholds() {
    assert_eq!(RevealGroup::HomeStats.options().threshold, 0.5);
    assert_eq!(RevealGroup::ContactStats.options().threshold, 0.3);
}

#[test]
fn stagger_steps_per_group() {
    assert_eq!(RevealGroup::Skills.stagger_ms(), 50);
    assert_eq!(RevealGroup::Experience.stagger_ms(), 100);
    assert_eq!(RevealGroup::Achievements.stagger_ms(), 100);
    assert_eq!(RevealGroup::Timeline.stagger_ms(), 0);
}

// =============================================================
// RevealTracker
// =============================================================

#[test]
fn begin_is_true_only_once() {
    let mut tracker = RevealTracker::new(RevealGroup::Timeline, 2);
    assert!(tracker.begin(1));
    assert!(!tracker.begin(1));
    assert!(tracker.begin(0));
}

#[test]
fn begin_out_of_range_is_rejected() {
    let mut tracker = RevealTracker::new(RevealGroup::Timeline, 1);
    assert!(!tracker.begin(5));
}

fn seen(index: usize) -> ObservedEntry {
    ObservedEntry { index, intersecting: true }
}

fn left(index: usize) -> ObservedEntry {
    ObservedEntry { index, intersecting: false }
}

#[test]
fn admit_batch_staggers_by_batch_position() {
    let mut tracker = RevealTracker::new(RevealGroup::Skills, 4);
    let scheduled = tracker.admit_batch(&[seen(2), seen(0), seen(3)]);
    assert_eq!(
        scheduled,
        vec![
            ScheduledReveal { index: 2, delay_ms: 0 },
            ScheduledReveal { index: 0, delay_ms: 50 },
            ScheduledReveal { index: 3, delay_ms: 100 },
        ]
    );
}

#[test]
fn non_intersecting_entries_still_count_toward_delay() {
    let mut tracker = RevealTracker::new(RevealGroup::Experience, 3);
    let scheduled = tracker.admit_batch(&[left(0), left(1), seen(2)]);
    assert_eq!(scheduled, vec![ScheduledReveal { index: 2, delay_ms: 200 }]);
    assert!(!tracker.all_started());
}

#[test]
fn admit_batch_skips_already_started() {
    let mut tracker = RevealTracker::new(RevealGroup::Experience, 3);
    tracker.admit_batch(&[seen(0)]);
    let scheduled = tracker.admit_batch(&[seen(0), seen(1)]);
    assert_eq!(scheduled, vec![ScheduledReveal { index: 1, delay_ms: 100 }]);
}

#[test]
fn all_started_once_every_index_admitted() {
    let mut tracker = RevealTracker::new(RevealGroup::Skills, 2);
    tracker.admit_batch(&[seen(0)]);
    assert!(!tracker.all_started());
    tracker.admit_batch(&[seen(1)]);
    assert!(tracker.all_started());
}

// =============================================================
// Styles
// =============================================================

#[test]
fn cards_slide_up_into_place() {
    assert!(RevealGroup::Experience.style(false).contains("translateY(30px)"));
    assert!(RevealGroup::Achievements.style(true).contains("opacity: 1"));
}

#[test]
fn timeline_slides_in_horizontally() {
    assert!(RevealGroup::Timeline.style(false).contains("translateX(-30px)"));
    assert!(RevealGroup::Timeline.style(true).contains("translateX(0)"));
}

#[test]
fn class_driven_groups_have_no_inline_style() {
    assert_eq!(RevealGroup::Skills.style(true), "");
    assert_eq!(RevealGroup::HomeStats.style(false), "");
}
