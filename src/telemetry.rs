//! Optional tracing setup for hosts embedding the engine. The library only
//! emits events; installing a subscriber is the host's choice.

use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

use crate::config::TelemetryConfig;

#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("log filter '{value}' did not parse")]
    LogFilter {
        value: String,
        #[source]
        source: ParseError,
    },
    #[error("subscriber installation failed: {0}")]
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

/// Install a compact fmt subscriber. `RUST_LOG` wins when set; otherwise the
/// configured log level is used.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| {
        EnvFilter::try_new(&config.log_level).map_err(|source| TelemetryError::LogFilter {
            value: config.log_level.clone(),
            source,
        })
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .compact()
        .try_init()
        .map_err(TelemetryError::Subscriber)
}
