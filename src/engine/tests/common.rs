use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::catalog::{MapPoint, ParkRecord};
use crate::engine::scoring::RankedPark;

pub(super) fn park(
    name: &str,
    region: &str,
    description: &str,
    tagline: &str,
    environment: &str,
    seasons: &[&str],
    activities: &[&str],
) -> ParkRecord {
    ParkRecord {
        name: name.to_string(),
        emoji: "🏞️".to_string(),
        states: vec!["Somewhere".to_string()],
        region: region.to_string(),
        description: description.to_string(),
        tagline: tagline.to_string(),
        best_time: "Year-round".to_string(),
        season_focus: seasons.iter().map(|s| s.to_string()).collect(),
        activities: activities.iter().map(|a| a.to_string()).collect(),
        coordinates: MapPoint { x: 50.0, y: 50.0 },
        environment: environment.to_string(),
    }
}

pub(super) fn desert_park() -> ParkRecord {
    park(
        "Desert Bloom",
        "Southwest",
        "iconic desert dunes and spring wildflower fields",
        "Golden hours over silent sands",
        "High desert",
        &["winter", "spring"],
        &["Stargazing", "Scenic drives"],
    )
}

pub(super) fn coastal_park() -> ParkRecord {
    park(
        "Harbor Reach",
        "Pacific Northwest",
        "rugged coast with tide pools and sea stacks",
        "Where the fog lifts first",
        "Marine terrace",
        &["summer"],
        &["Kayaking", "Tidepooling"],
    )
}

pub(super) fn alpine_park() -> ParkRecord {
    park(
        "Granite Crown",
        "Rockies",
        "alpine meadows beneath granite peaks",
        "Thin air, long views",
        "Subalpine",
        &["summer", "fall"],
        &["Hiking", "Climbing"],
    )
}

pub(super) fn rainforest_park() -> ParkRecord {
    park(
        "Mist Hollow",
        "Pacific Northwest",
        "temperate rainforest draped in moss",
        "Green from floor to sky",
        "Rainforest",
        &["spring", "summer"],
        &["Hiking", "Birding"],
    )
}

pub(super) fn catalog() -> Vec<ParkRecord> {
    vec![
        desert_park(),
        coastal_park(),
        alpine_park(),
        rainforest_park(),
    ]
}

pub(super) fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

/// Every score must sit within one jitter unit of its component sum.
pub(super) fn assert_score_bounds(ranked: &[RankedPark<'_>]) {
    for entry in ranked {
        let base = entry.base_points() as f32;
        assert!(
            entry.score >= base && entry.score < base + 1.0,
            "score {} for '{}' outside [{base}, {})",
            entry.score,
            entry.park.name,
            base + 1.0
        );
    }
}
