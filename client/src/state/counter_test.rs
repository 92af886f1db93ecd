use super::*;

fn run_to_end(anim: &mut CounterAnimation) -> Vec<String> {
    let mut frames = Vec::new();
    for _ in 0..10_000 {
        let frame = anim.step();
        frames.push(frame.text);
        if frame.done {
            break;
        }
    }
    frames
}

// =============================================================
// formatting
// =============================================================

#[test]
fn format_is_chosen_by_fractional_part() {
    assert_eq!(CounterFormat::for_target(15.0), CounterFormat::Grouped);
    assert_eq!(CounterFormat::for_target(3.5), CounterFormat::Decimal);
}

#[test]
fn grouped_format_floors_and_groups() {
    assert_eq!(CounterFormat::Grouped.format(515_151.0), "515,151");
    assert_eq!(CounterFormat::Grouped.format(999.9), "999");
    assert_eq!(CounterFormat::Grouped.format(1000.0), "1,000");
    assert_eq!(CounterFormat::Grouped.format(0.0), "0");
}

#[test]
fn decimal_format_has_two_places() {
    assert_eq!(CounterFormat::Decimal.format(3.5), "3.50");
    assert_eq!(CounterFormat::Decimal.format(2.0 / 3.0), "0.67");
}

// =============================================================
// animation
// =============================================================

#[test]
fn integer_counter_is_monotonic_and_ends_on_target() {
    let mut anim = CounterAnimation::new(15.0, 2000.0);
    let frames = run_to_end(&mut anim);
    let values: Vec<i64> = frames.iter().map(|t| t.replace(',', "").parse().unwrap()).collect();
    assert!(values.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(frames.last().map(String::as_str), Some("15"));
    assert!(anim.step().done);
}

#[test]
fn fractional_counter_ends_with_two_decimals() {
    let mut anim = CounterAnimation::new(3.5, 2000.0);
    let frames = run_to_end(&mut anim);
    assert_eq!(frames.last().map(String::as_str), Some("3.50"));
}

#[test]
fn large_counter_ends_grouped() {
    let mut anim = CounterAnimation::new(515_151.0, 3000.0);
    let frames = run_to_end(&mut anim);
    assert_eq!(frames.last().map(String::as_str), Some("515,151"));
}

#[test]
fn frame_count_tracks_duration() {
    let mut anim = CounterAnimation::new(100.0, 1600.0);
    let frames = run_to_end(&mut anim);
    // 100 increments of 1.0; the last one reaches the target and snaps.
    assert!((99..=101).contains(&frames.len()));
}

#[test]
fn zero_target_finishes_immediately() {
    let mut anim = CounterAnimation::new(0.0, 2000.0);
    let frame = anim.step();
    assert!(frame.done);
    assert_eq!(frame.text, "0");
}

#[test]
fn sub_frame_duration_finishes_immediately() {
    let mut anim = CounterAnimation::new(42.0, 0.0);
    let frame = anim.step();
    assert!(frame.done);
    assert_eq!(frame.text, "42");
}

#[test]
fn step_after_done_repeats_final_frame() {
    let mut anim = CounterAnimation::new(1.0, 16.0);
    assert!(anim.step().done);
    assert_eq!(anim.step(), CounterFrame { text: "1".to_owned(), done: true });
}

// =============================================================
// parse_target
// =============================================================

#[test]
fn parse_target_accepts_numbers_only() {
    assert_eq!(parse_target(" 12 "), Some(12.0));
    assert_eq!(parse_target("3.5"), Some(3.5));
    assert_eq!(parse_target("abc"), None);
    assert_eq!(parse_target("NaN"), None);
}
