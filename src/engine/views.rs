use serde::Serialize;

use super::environment::derive_environment;
use super::scoring::RankedPark;
use crate::catalog::ParkRecord;

/// Marker cap for the main map panel.
pub const MAP_MARKER_LIMIT: usize = 40;
/// Marker cap for the smaller hero map.
pub const HERO_MARKER_LIMIT: usize = 18;

const DEFAULT_PLAN_DAYS: u8 = 4;

/// One curated pick inside an itinerary plan, flattened for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItineraryPick {
    pub rank: usize,
    pub name: String,
    pub emoji: String,
    pub environment_label: &'static str,
    pub best_time: String,
    pub tagline: String,
    pub signature_activity: Option<String>,
    pub score: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItineraryPlan {
    pub heading: &'static str,
    pub days: u8,
    pub picks: Vec<ItineraryPick>,
}

/// Shape a ranking into the curated-picks block. An empty prompt switches
/// the heading to the discovery variant; `days` of zero falls back to a
/// four-day plan.
pub fn build_itinerary(ranked: &[RankedPark<'_>], prompt: &str, days: u8) -> ItineraryPlan {
    let heading = if prompt.trim().is_empty() {
        "Fresh inspiration"
    } else {
        "Your vibe"
    };
    let days = if days == 0 { DEFAULT_PLAN_DAYS } else { days };

    let picks = ranked
        .iter()
        .enumerate()
        .map(|(index, entry)| ItineraryPick {
            rank: index + 1,
            name: entry.park.name.clone(),
            emoji: entry.park.emoji.clone(),
            environment_label: derive_environment(entry.park).label(),
            best_time: entry.park.best_time.clone(),
            tagline: entry.park.tagline.clone(),
            signature_activity: entry.park.signature_activity().map(str::to_string),
            score: entry.score,
        })
        .collect();

    ItineraryPlan {
        heading,
        days,
        picks,
    }
}

struct SeasonalVibe {
    title: &'static str,
    emoji: &'static str,
    keyword: &'static str,
    months: &'static str,
}

const SEASONAL_VIBES: [SeasonalVibe; 4] = [
    SeasonalVibe {
        title: "Desert glow",
        emoji: "🏜️",
        keyword: "desert",
        months: "Oct–Apr",
    },
    SeasonalVibe {
        title: "Alpine bloom",
        emoji: "🏔️",
        keyword: "alpine",
        months: "Jul–Sep",
    },
    SeasonalVibe {
        title: "Coastal calm",
        emoji: "🌊",
        keyword: "coast",
        months: "Mar–Jun",
    },
    SeasonalVibe {
        title: "Rainforest mist",
        emoji: "🌧️",
        keyword: "rainforest",
        months: "May–Sep",
    },
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonalHighlight {
    pub title: &'static str,
    pub emoji: &'static str,
    pub months: &'static str,
    pub park_name: String,
    pub best_time: String,
}

/// Pair each seasonal vibe with the first park whose description mentions
/// its keyword, falling back to the first park in the catalog. An empty
/// catalog yields no highlights.
pub fn seasonal_highlights(records: &[ParkRecord]) -> Vec<SeasonalHighlight> {
    let Some(first) = records.first() else {
        return Vec::new();
    };

    SEASONAL_VIBES
        .iter()
        .map(|vibe| {
            let park = records
                .iter()
                .find(|park| park.description.to_lowercase().contains(vibe.keyword))
                .unwrap_or(first);
            SeasonalHighlight {
                title: vibe.title,
                emoji: vibe.emoji,
                months: vibe.months,
                park_name: park.name.clone(),
                best_time: park.best_time.clone(),
            }
        })
        .collect()
}

/// Map marker ready for absolute positioning on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerView {
    pub x: f32,
    pub y: f32,
    pub emoji: String,
    pub label: String,
    pub z_index: usize,
}

/// Project parks onto map markers, capping the count so dense filters do
/// not flood the canvas. Later markers stack above earlier ones.
pub fn markers<'a>(
    parks: impl IntoIterator<Item = &'a ParkRecord>,
    limit: usize,
) -> Vec<MarkerView> {
    parks
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(index, park)| MarkerView {
            x: park.coordinates.x,
            y: park.coordinates.y,
            emoji: park.emoji.clone(),
            label: park.marker_label().to_string(),
            z_index: 5 + index,
        })
        .collect()
}

/// Chips shown against the spotlighted park: region, environment, and the
/// first two activities.
pub fn spotlight_tags(park: &ParkRecord) -> Vec<String> {
    let mut tags = vec![
        park.region.clone(),
        derive_environment(park).label().to_string(),
    ];
    tags.extend(park.activities.iter().take(2).cloned());
    tags
}
