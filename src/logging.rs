//! Logging initialization.
//!
//! The library only emits `tracing` events. Hosts that want them printed call
//! [`init_logging`] once at startup.

use serde::{Deserialize, Serialize};
use tracing::Level;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::error::ConfigError;

/// Output format for log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Compact human-readable lines.
    #[default]
    Compact,
    /// One JSON object per line.
    Json,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default level for this crate (`error`, `warn`, `info`, `debug`, `trace`).
    pub level: String,
    /// Line format.
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Compact,
        }
    }
}

impl LogConfig {
    fn tracing_level(&self) -> Result<Level, ConfigError> {
        self.level.parse::<Level>().map_err(|e| ConfigError::Parse {
            message: format!("invalid log level '{}': {e}", self.level),
        })
    }
}

/// Installs a global subscriber. `RUST_LOG` overrides the configured level.
///
/// # Errors
/// Returns `ConfigError::Parse` for an unknown level or if a global subscriber
/// is already installed.
pub fn init_logging(config: &LogConfig) -> Result<(), ConfigError> {
    let level = config.tracing_level()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("mazerunner={level}")))
        .map_err(|e| ConfigError::Parse {
            message: format!("failed to create log filter: {e}"),
        })?;

    let registry = tracing_subscriber::registry().with(env_filter);
    let result = match config.format {
        LogFormat::Compact => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_span_events(FmtSpan::NONE)
                    .compact(),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_ansi(false)
                    .with_span_events(FmtSpan::CLOSE)
                    .json(),
            )
            .try_init(),
    };

    result.map_err(|e| ConfigError::Parse {
        message: format!("failed to install subscriber: {e}"),
    })
}
