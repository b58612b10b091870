//! Error types for mazerunner.
//!
//! All errors are strongly typed using thiserror so callers can match on the
//! specific lifecycle or storage condition that went wrong.

use thiserror::Error;

use crate::session::SessionState;

/// Lifecycle misuse of the movement log or the session controller.
///
/// These are programming errors. They stop the offending operation before any
/// state is touched; nothing is silently ignored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreconditionError {
    #[error("Movement log was appended to before being cleared for a solve session")]
    LogNotCleared,

    #[error("Movement log is frozen; append rejected")]
    LogFrozen,

    #[error("Movement log was already frozen")]
    LogAlreadyFrozen,

    #[error("No autonomous session is active")]
    NoActiveSession,

    #[error("An autonomous session is already active ({state})")]
    SessionAlreadyActive {
        state: SessionState,
    },
}

/// Invalid navigation configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Config field '{field}' must be finite (got {value})")]
    NonFinite {
        field: &'static str,
        value: f64,
    },

    #[error("Backup distance {backup_mm}mm must be below forward clearance {forward_mm}mm")]
    InvertedDistanceBands {
        backup_mm: f64,
        forward_mm: f64,
    },

    #[error("Distance scale must be positive (got {value} mm/V)")]
    NonPositiveScale {
        value: f64,
    },

    #[error("Failed to parse config: {message}")]
    Parse {
        message: String,
    },
}

/// Errors raised by run store backends.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A lock guarding the stored run was poisoned.
    #[error("Poisoned lock: {0}")]
    PoisonedLock(&'static str),

    /// Underlying file I/O failed.
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A run could not be serialized for writing.
    #[error("Failed to encode run snapshot: {0}")]
    Encode(String),

    /// Snapshot failed its integrity checks.
    #[error("Corrupt run snapshot: {0}")]
    Corrupt(String),

    /// Snapshot was written by an incompatible codec version.
    #[error("Unsupported snapshot version {found} (expected {expected})")]
    UnsupportedVersion {
        found: u8,
        expected: u8,
    },
}

/// Top-level error type for mazerunner.
#[derive(Debug, Error)]
pub enum MazeError {
    #[error("Precondition violated: {0}")]
    Precondition(#[from] PreconditionError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl MazeError {
    /// Returns true if this is a lifecycle precondition violation.
    #[must_use]
    pub const fn is_precondition(&self) -> bool {
        matches!(self, Self::Precondition(_))
    }

    /// Returns true if this is a configuration error.
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Returns true if this is a storage error.
    #[must_use]
    pub const fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}

/// Result type alias for mazerunner operations.
pub type MazeResult<T> = Result<T, MazeError>;
