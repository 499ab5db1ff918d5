//! park-scout: the filtering and ranking core behind a parks discovery
//! widget.
//!
//! The crate owns the non-trivial logic only: deriving environment facets
//! from record text, evaluating multi-predicate filters, and ranking parks
//! against a free-text prompt plus selected facets. Rendering, event wiring,
//! and layout live with the embedding host, which calls in with a
//! [`engine::FilterState`] or [`engine::ScoringContext`] and renders the
//! structured results.

pub mod catalog;
pub mod config;
pub mod engine;
pub mod telemetry;

pub use catalog::{CatalogError, MapPoint, ParkRecord};
pub use config::{ConfigError, EngineConfig, ScoringWeights, TelemetryConfig, DEFAULT_TOP_N};
pub use engine::{
    derive_environment, filter_catalog, rank_catalog, Environment, FilterState, RankedPark,
    RecommendationEngine, ScoreComponent, ScoreSignal, ScoringContext,
};
pub use telemetry::TelemetryError;
