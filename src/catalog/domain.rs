use serde::{Deserialize, Serialize};

/// Position on the abstract 2-D map, expressed as percentages of the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapPoint {
    pub x: f32,
    pub y: f32,
}

impl MapPoint {
    pub fn within_canvas(&self) -> bool {
        (0.0..=100.0).contains(&self.x) && (0.0..=100.0).contains(&self.y)
    }
}

/// One park entry in the static catalog. Records are loaded once and never
/// mutated; every derived facet is recomputed on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParkRecord {
    pub name: String,
    pub emoji: String,
    pub states: Vec<String>,
    pub region: String,
    pub description: String,
    pub tagline: String,
    pub best_time: String,
    pub season_focus: Vec<String>,
    /// Ordered; the first entry is the signature activity.
    pub activities: Vec<String>,
    pub coordinates: MapPoint,
    /// Free-text hint, one signal among several for environment derivation.
    pub environment: String,
}

impl ParkRecord {
    /// Case-folded haystack shared by the text predicate and the prompt
    /// token scorer: name, description, tagline, and activities.
    pub fn search_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.name,
            self.description,
            self.tagline,
            self.activities.join(" ")
        )
        .to_lowercase()
    }

    /// States joined for display, e.g. "California · Nevada".
    pub fn formatted_states(&self) -> String {
        self.states.join(" · ")
    }

    /// Short label used next to a map marker: the first word of the name.
    pub fn marker_label(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }

    pub fn signature_activity(&self) -> Option<&str> {
        self.activities.first().map(String::as_str)
    }

    pub fn has_season(&self, season: &str) -> bool {
        self.season_focus.iter().any(|tag| tag == season)
    }

    /// True if any activity contains `needle` (case-folded substring match).
    pub fn offers_activity(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.activities
            .iter()
            .any(|activity| activity.to_lowercase().contains(&needle))
    }
}
