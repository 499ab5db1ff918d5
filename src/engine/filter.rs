use serde::{Deserialize, Serialize};

use super::environment::{derive_environment, Environment};
use crate::catalog::ParkRecord;

/// Facet selections for one filtering pass. `None` means the facet is not
/// constrained (the "all" option in a select control); the default state
/// passes every record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterState {
    pub term: String,
    pub region: Option<String>,
    pub season: Option<String>,
    pub environment: Option<Environment>,
    pub activity: Option<String>,
}

impl FilterState {
    pub fn with_term(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            ..Self::default()
        }
    }
}

/// Evaluate the composite filter over the catalog, preserving catalog order.
/// A record passes only when all five predicates hold.
pub fn filter_catalog<'a>(
    records: &'a [ParkRecord],
    state: &FilterState,
) -> Vec<&'a ParkRecord> {
    let term = state.term.trim().to_lowercase();

    let matches: Vec<&ParkRecord> = records
        .iter()
        .filter(|park| {
            let matches_term = term.is_empty() || park.search_text().contains(&term);
            let matches_region = state
                .region
                .as_ref()
                .map_or(true, |region| &park.region == region);
            let matches_season = state
                .season
                .as_ref()
                .map_or(true, |season| park.has_season(season));
            let matches_environment = state
                .environment
                .map_or(true, |environment| derive_environment(park) == environment);
            let matches_activity = state
                .activity
                .as_ref()
                .map_or(true, |activity| park.offers_activity(activity));

            matches_term
                && matches_region
                && matches_season
                && matches_environment
                && matches_activity
        })
        .collect();

    tracing::debug!(
        total = records.len(),
        matched = matches.len(),
        "filter pass complete"
    );

    matches
}
