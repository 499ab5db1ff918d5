//! The filtering, facet-derivation, and ranking core. Everything here is a
//! pure function of its arguments (plus the caller-supplied RNG for ranking
//! jitter); the presentation layer owns all state and rendering.

pub mod environment;
pub mod filter;
pub mod scoring;
pub mod views;

#[cfg(test)]
mod tests;

pub use environment::{derive_environment, Environment};
pub use filter::{filter_catalog, FilterState};
pub use scoring::{rank_catalog, RankedPark, ScoreComponent, ScoreSignal, ScoringContext};
pub use views::{
    build_itinerary, markers, seasonal_highlights, spotlight_tags, ItineraryPick, ItineraryPlan,
    MarkerView, SeasonalHighlight, HERO_MARKER_LIMIT, MAP_MARKER_LIMIT,
};

use rand::Rng;

use crate::catalog::ParkRecord;
use crate::config::{EngineConfig, ScoringWeights, DEFAULT_TOP_N};

/// Stateless facade bundling the scoring weights with the filter and
/// ranking passes.
pub struct RecommendationEngine {
    weights: ScoringWeights,
    default_top_n: usize,
}

impl RecommendationEngine {
    pub fn new(weights: ScoringWeights) -> Self {
        Self {
            weights,
            default_top_n: DEFAULT_TOP_N,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            weights: config.weights.clone(),
            default_top_n: config.default_top_n,
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn filter<'a>(
        &self,
        records: &'a [ParkRecord],
        state: &FilterState,
    ) -> Vec<&'a ParkRecord> {
        filter_catalog(records, state)
    }

    pub fn rank<'a, R: Rng + ?Sized>(
        &self,
        records: &'a [ParkRecord],
        context: &ScoringContext,
        rng: &mut R,
        top_n: usize,
    ) -> Vec<RankedPark<'a>> {
        rank_catalog(records, context, &self.weights, rng, top_n)
    }

    /// Rank with the thread-local RNG and the configured result size.
    pub fn recommend<'a>(
        &self,
        records: &'a [ParkRecord],
        context: &ScoringContext,
    ) -> Vec<RankedPark<'a>> {
        self.rank(records, context, &mut rand::thread_rng(), self.default_top_n)
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new(ScoringWeights::default())
    }
}
