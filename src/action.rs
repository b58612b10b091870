//! Discrete drive actions.
//!
//! Every tick produces exactly one [`Action`], whether it came from live
//! navigation or from replaying a stored run.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One discrete movement command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Drive straight ahead.
    Forward,
    /// Reverse away from an obstruction.
    Backup,
    /// Spin in place to the right.
    #[serde(rename = "RIGHT")]
    TurnRight,
    /// Halt both wheels.
    Stop,
}

/// Signed unit speeds for the left and right wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WheelSpeeds {
    /// Left wheel speed in `-1..=1`.
    pub left: i8,
    /// Right wheel speed in `-1..=1`.
    pub right: i8,
}

impl Action {
    /// All actions, in declaration order.
    pub const ALL: [Self; 4] = [Self::Forward, Self::Backup, Self::TurnRight, Self::Stop];

    /// Wheel speeds for this action.
    ///
    /// The motors are mounted mirrored, so straight-line travel drives the
    /// wheels with opposite signs and a spin drives them with the same sign.
    #[must_use]
    pub const fn wheel_speeds(self) -> WheelSpeeds {
        let (left, right) = match self {
            Self::Forward => (1, -1),
            Self::Backup => (-1, 1),
            Self::TurnRight => (-1, -1),
            Self::Stop => (0, 0),
        };
        WheelSpeeds { left, right }
    }

    /// Stable label used in logs and persisted runs.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Forward => "FORWARD",
            Self::Backup => "BACKUP",
            Self::TurnRight => "RIGHT",
            Self::Stop => "STOP",
        }
    }

    /// Returns true for actions that move the vehicle.
    #[must_use]
    pub const fn is_movement(self) -> bool {
        !matches!(self, Self::Stop)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An action label that does not name any known action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown action label: {label}")]
pub struct UnknownAction {
    /// The rejected label.
    pub label: String,
}

impl FromStr for Action {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.label() == s)
            .ok_or_else(|| UnknownAction {
                label: s.to_string(),
            })
    }
}
