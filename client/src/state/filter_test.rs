use super::*;

const CATEGORIES: [&str; 4] = ["ml", "web", "ml", "iot"];

fn settled(state: &mut FilterState, token: FilterToken) {
    state.settle_entering(token);
    state.settle_leaving(token);
}

fn visible(state: &FilterState) -> Vec<usize> {
    (0..state.phases.len()).filter(|&i| matches!(state.phase(i), CardPhase::Shown | CardPhase::Entering)).collect()
}

// =============================================================
// FilterSelection
// =============================================================

#[test]
fn parse_all_is_wildcard() {
    assert_eq!(FilterSelection::parse("all"), FilterSelection::All);
    assert_eq!(FilterSelection::parse(" ALL "), FilterSelection::All);
    assert_eq!(FilterSelection::parse("ml"), FilterSelection::Category("ml".to_owned()));
}

#[test]
fn category_matches_exactly() {
    let sel = FilterSelection::parse("ml");
    assert!(sel.matches("ml"));
    assert!(!sel.matches("mlops"));
    assert!(FilterSelection::All.matches("anything"));
}

// =============================================================
// FilterState projection
// =============================================================

#[test]
fn all_selection_leaves_every_card_visible() {
    let mut state = FilterState::new(CATEGORIES.len());
    let token = state.select(FilterSelection::All, &CATEGORIES);
    settled(&mut state, token);
    assert!(state.phases.iter().all(|p| *p == CardPhase::Shown));
}

#[test]
fn category_selection_shows_exactly_matching_cards() {
    let mut state = FilterState::new(CATEGORIES.len());
    let token = state.select(FilterSelection::parse("ml"), &CATEGORIES);
    settled(&mut state, token);
    assert_eq!(visible(&state), vec![0, 2]);
    assert_eq!(state.phase(1), CardPhase::Hidden);
    assert_eq!(state.phase(3), CardPhase::Hidden);
}

#[test]
fn leaving_cards_stay_displayed_until_window_elapses() {
    let mut state = FilterState::new(CATEGORIES.len());
    let token = state.select(FilterSelection::parse("web"), &CATEGORIES);
    assert_eq!(state.phase(0), CardPhase::Leaving);
    assert_ne!(state.phase(0), CardPhase::Hidden);
    assert_eq!(state.phase(1), CardPhase::Shown);
    state.settle_entering(token);
    assert_eq!(state.phase(0), CardPhase::Leaving);
    state.settle_leaving(token);
    assert_eq!(state.phase(0), CardPhase::Hidden);
}

#[test]
fn reselecting_reevaluates_from_scratch() {
    let mut state = FilterState::new(CATEGORIES.len());
    let token = state.select(FilterSelection::parse("iot"), &CATEGORIES);
    settled(&mut state, token);
    let token = state.select(FilterSelection::All, &CATEGORIES);
    settled(&mut state, token);
    assert_eq!(visible(&state), vec![0, 1, 2, 3]);
}

#[test]
fn hidden_card_enters_when_selected_again() {
    let mut state = FilterState::new(CATEGORIES.len());
    let token = state.select(FilterSelection::parse("web"), &CATEGORIES);
    settled(&mut state, token);
    state.select(FilterSelection::parse("ml"), &CATEGORIES);
    assert_eq!(state.phase(0), CardPhase::Entering);
    assert_eq!(state.phase(1), CardPhase::Leaving);
    assert_eq!(state.phase(3), CardPhase::Hidden);
}

#[test]
fn stale_settle_cannot_hide_newly_selected_cards() {
    let mut state = FilterState::new(CATEGORIES.len());
    let old = state.select(FilterSelection::parse("iot"), &CATEGORIES);
    let new = state.select(FilterSelection::All, &CATEGORIES);

    assert!(!state.settle_leaving(old));
    assert!(state.phases.iter().all(|p| *p != CardPhase::Hidden));
    settled(&mut state, new);
    assert_eq!(visible(&state), vec![0, 1, 2, 3]);
}

#[test]
fn phase_presentation() {
    assert_eq!(CardPhase::Hidden.class(), "hide");
    assert_eq!(CardPhase::Shown.class(), "show");
    assert!(CardPhase::Hidden.style().starts_with("display: none"));
    assert!(CardPhase::Shown.style().contains("opacity: 1"));
}
