use super::*;
use crate::state::counter::parse_target;
use crate::state::filter::FilterSelection;

#[test]
fn every_project_category_has_a_filter_button() {
    for project in &PROJECTS {
        assert!(
            FILTERS.iter().any(|(value, _)| *value == project.category),
            "no filter for {}",
            project.category
        );
    }
}

#[test]
fn first_filter_is_the_wildcard() {
    assert_eq!(FilterSelection::parse(FILTERS[0].0), FilterSelection::All);
}

#[test]
fn home_stat_targets_parse() {
    for stat in &HOME_STATS {
        assert!(parse_target(stat.target).is_some(), "{}", stat.target);
    }
}

#[test]
fn contact_stats_match_published_figures() {
    let figures: Vec<(&str, f64, f64)> = CONTACT_STATS.iter().map(|s| (s.id, s.target, s.duration_ms)).collect();
    assert_eq!(
        figures,
        vec![("projectCount", 15.0, 2000.0), ("coffeeCount", 515.0, 2500.0), ("codeLines", 515_151.0, 3000.0)]
    );
}

#[test]
fn skill_progress_is_a_percentage() {
    assert!(SKILLS.iter().all(|s| s.progress <= 100));
}

#[test]
fn nav_links_start_at_home() {
    assert_eq!(NAV_LINKS[0].id, "home");
}
