//! Session mode selection.
//!
//! The operator picks between two labeled options; the core only ever sees
//! the resolved [`SessionKind`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which engine drives an autonomous session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionKind {
    /// Navigate live from sensors and record the run.
    #[default]
    Solve,
    /// Play back the last optimized run.
    Replay,
}

impl SessionKind {
    /// Both options, default first.
    pub const OPTIONS: [Self; 2] = [Self::Solve, Self::Replay];

    /// Operator-facing label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Solve => "Solve Maze",
            Self::Replay => "Replay Last Maze",
        }
    }
}

impl fmt::Display for SessionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A mode label that matches neither option.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown session mode: {label}")]
pub struct UnknownMode {
    /// The rejected label.
    pub label: String,
}

impl FromStr for SessionKind {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::OPTIONS
            .into_iter()
            .find(|kind| kind.label() == s)
            .ok_or_else(|| UnknownMode {
                label: s.to_string(),
            })
    }
}

/// Resolves the requested mode against what is stored.
///
/// `Replay` is honored only when a non-empty run is stored; otherwise the
/// session falls back to `Solve`. The fallback is not an error.
#[must_use]
pub const fn select_session_kind(requested: SessionKind, has_stored_run: bool) -> SessionKind {
    match requested {
        SessionKind::Replay if has_stored_run => SessionKind::Replay,
        _ => SessionKind::Solve,
    }
}
