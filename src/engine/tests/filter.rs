use super::common::*;
use crate::engine::environment::Environment;
use crate::engine::filter::{filter_catalog, FilterState};

#[test]
fn default_state_passes_every_record_in_order() {
    let parks = catalog();

    let filtered = filter_catalog(&parks, &FilterState::default());

    assert_eq!(filtered.len(), parks.len());
    for (kept, original) in filtered.iter().zip(&parks) {
        assert_eq!(kept.name, original.name);
    }
}

#[test]
fn term_matches_name_case_insensitively() {
    let parks = catalog();

    let filtered = filter_catalog(&parks, &FilterState::with_term("bloom"));

    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].name, "Desert Bloom");
}

#[test]
fn term_reaches_into_activities() {
    let parks = catalog();

    let filtered = filter_catalog(&parks, &FilterState::with_term("kayak"));

    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].name, "Harbor Reach");
}

#[test]
fn region_is_an_exact_match() {
    let parks = catalog();
    let state = FilterState {
        region: Some("Pacific Northwest".to_string()),
        ..FilterState::default()
    };

    let filtered = filter_catalog(&parks, &state);

    assert_eq!(filtered.len(), 2);

    // Case differences do not count as a match.
    let state = FilterState {
        region: Some("pacific northwest".to_string()),
        ..FilterState::default()
    };
    assert!(filter_catalog(&parks, &state).is_empty());
}

#[test]
fn season_filters_on_the_focus_tags() {
    let parks = catalog();
    let state = FilterState {
        season: Some("winter".to_string()),
        ..FilterState::default()
    };

    let filtered = filter_catalog(&parks, &state);

    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].name, "Desert Bloom");
}

#[test]
fn environment_filters_on_the_derived_facet() {
    let parks = catalog();
    let state = FilterState {
        environment: Some(Environment::Forest),
        ..FilterState::default()
    };

    let filtered = filter_catalog(&parks, &state);

    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].name, "Mist Hollow");
}

#[test]
fn activity_chip_is_a_substring_match() {
    let parks = catalog();
    let state = FilterState {
        activity: Some("hik".to_string()),
        ..FilterState::default()
    };

    let filtered = filter_catalog(&parks, &state);

    let names: Vec<&str> = filtered.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Granite Crown", "Mist Hollow"]);
}

#[test]
fn predicates_combine_as_a_conjunction() {
    let parks = catalog();

    // Term matches the desert park, region matches the coastal parks, so
    // nothing satisfies both.
    let state = FilterState {
        term: "dunes".to_string(),
        region: Some("Pacific Northwest".to_string()),
        ..FilterState::default()
    };
    assert!(filter_catalog(&parks, &state).is_empty());

    // Same term with the agreeing region keeps the record.
    let state = FilterState {
        term: "dunes".to_string(),
        region: Some("Southwest".to_string()),
        ..FilterState::default()
    };
    assert_eq!(filter_catalog(&parks, &state).len(), 1);
}

#[test]
fn filtering_is_idempotent() {
    let parks = catalog();
    let state = FilterState {
        season: Some("summer".to_string()),
        ..FilterState::default()
    };

    let first: Vec<_> = filter_catalog(&parks, &state)
        .into_iter()
        .cloned()
        .collect();
    let second = filter_catalog(&first, &state);

    assert_eq!(second.len(), first.len());
    for (again, once) in second.iter().zip(&first) {
        assert_eq!(again.name, once.name);
    }
}

#[test]
fn empty_catalog_yields_an_empty_result() {
    let filtered = filter_catalog(&[], &FilterState::with_term("anything"));
    assert!(filtered.is_empty());
}
