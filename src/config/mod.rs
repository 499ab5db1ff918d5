use std::env;
use std::fmt;

use serde::{Deserialize, Serialize};

/// How many picks a ranking returns unless the caller asks otherwise.
pub const DEFAULT_TOP_N: usize = 3;

/// Point values for each ranking signal. Defaults mirror the production
/// widget: prompt tokens and the activity chip are worth 2, the season and
/// mood facets 3.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub token_match: i16,
    pub season_match: i16,
    pub mood_match: i16,
    pub activity_match: i16,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            token_match: 2,
            season_match: 3,
            mood_match: 3,
            activity_match: 2,
        }
    }
}

/// Log filtering controls for hosts that opt into telemetry.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Top-level engine configuration for embedding hosts.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub weights: ScoringWeights,
    pub default_top_n: usize,
    pub telemetry: TelemetryConfig,
}

impl EngineConfig {
    /// Read overrides from the environment (and a `.env` file when present).
    /// Scoring weights stay code-level; only the result size and log level
    /// are surfaced as env vars.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let top_n_raw = env::var("PARK_SCOUT_TOP_N").unwrap_or_else(|_| DEFAULT_TOP_N.to_string());
        let default_top_n = top_n_raw
            .parse::<usize>()
            .map_err(|_| ConfigError::InvalidTopN { value: top_n_raw })?;

        let log_level = env::var("PARK_SCOUT_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            weights: ScoringWeights::default(),
            default_top_n,
            telemetry: TelemetryConfig { log_level },
        })
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            default_top_n: DEFAULT_TOP_N,
            telemetry: TelemetryConfig {
                log_level: "info".to_string(),
            },
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidTopN { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTopN { value } => {
                write!(f, "PARK_SCOUT_TOP_N '{value}' is not a valid count")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
