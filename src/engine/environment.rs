use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::ParkRecord;

/// Closed set of environment facets a park can be classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Environment {
    Coastal,
    Mountains,
    Canyon,
    Desert,
    Forest,
    Islands,
    Wild,
}

/// Keyword table walked in priority order; the first label with any keyword
/// present in the record text wins, even when later labels also match.
const ENVIRONMENT_KEYWORDS: [(Environment, &[&str]); 6] = [
    (Environment::Coastal, &["coast", "bay", "island", "marine"]),
    (
        Environment::Mountains,
        &["alpine", "peaks", "mountain", "volcano"],
    ),
    (Environment::Canyon, &["canyon", "gorge"]),
    (Environment::Desert, &["desert", "dune"]),
    (Environment::Forest, &["forest", "wood", "grove"]),
    (Environment::Islands, &["island", "archipelago", "reef"]),
];

impl Environment {
    pub const fn label(self) -> &'static str {
        match self {
            Environment::Coastal => "Coastal",
            Environment::Mountains => "Mountains",
            Environment::Canyon => "Canyon",
            Environment::Desert => "Desert",
            Environment::Forest => "Forest",
            Environment::Islands => "Islands",
            Environment::Wild => "Wild",
        }
    }

    /// Parse a facet value coming back from a UI control.
    pub fn from_label(value: &str) -> Option<Self> {
        match value {
            "Coastal" => Some(Environment::Coastal),
            "Mountains" => Some(Environment::Mountains),
            "Canyon" => Some(Environment::Canyon),
            "Desert" => Some(Environment::Desert),
            "Forest" => Some(Environment::Forest),
            "Islands" => Some(Environment::Islands),
            "Wild" => Some(Environment::Wild),
            _ => None,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a park into its environment facet from the free-text hint,
/// description, and tagline. Total and deterministic; `Wild` is the fallback
/// when no keyword applies.
pub fn derive_environment(park: &ParkRecord) -> Environment {
    let text = format!(
        "{} {} {}",
        park.environment, park.description, park.tagline
    )
    .to_lowercase();

    for (environment, keywords) in ENVIRONMENT_KEYWORDS {
        if keywords.iter().any(|keyword| text.contains(keyword)) {
            return environment;
        }
    }

    Environment::Wild
}
