use super::common::*;
use crate::engine::environment::{derive_environment, Environment};

#[test]
fn classifies_each_fixture_park() {
    assert_eq!(derive_environment(&desert_park()), Environment::Desert);
    assert_eq!(derive_environment(&coastal_park()), Environment::Coastal);
    assert_eq!(derive_environment(&alpine_park()), Environment::Mountains);
    assert_eq!(derive_environment(&rainforest_park()), Environment::Forest);
}

#[test]
fn derivation_is_deterministic() {
    let park = coastal_park();
    let first = derive_environment(&park);

    for _ in 0..10 {
        assert_eq!(derive_environment(&park), first);
    }
}

#[test]
fn coastal_outranks_mountains_when_both_match() {
    let park = park(
        "Split Ridge",
        "West",
        "a mountain road winding down to the coast",
        "Two worlds in one drive",
        "",
        &["summer"],
        &["Driving"],
    );

    assert_eq!(derive_environment(&park), Environment::Coastal);
}

#[test]
fn falls_back_to_wild_when_nothing_matches() {
    let park = park(
        "Open Range",
        "Plains",
        "endless grass and sky",
        "Room to roam",
        "Prairie",
        &["spring"],
        &["Wildlife watching"],
    );

    assert_eq!(derive_environment(&park), Environment::Wild);
}

#[test]
fn keyword_match_is_case_insensitive() {
    let park = park(
        "Echo Walls",
        "Southwest",
        "A slot CANYON carved by flash floods",
        "Stone corridors",
        "",
        &["fall"],
        &["Canyoneering"],
    );

    assert_eq!(derive_environment(&park), Environment::Canyon);
}

#[test]
fn labels_round_trip_through_parsing() {
    for environment in [
        Environment::Coastal,
        Environment::Mountains,
        Environment::Canyon,
        Environment::Desert,
        Environment::Forest,
        Environment::Islands,
        Environment::Wild,
    ] {
        assert_eq!(Environment::from_label(environment.label()), Some(environment));
    }
    assert_eq!(Environment::from_label("Swamp"), None);
}
