//! Navigation decision engine.
//!
//! Maps one [`Measurement`] to one [`Action`] per tick. The engine is
//! stateless: it neither records the action nor drives the motors, so the same
//! measurement always yields the same decision.
//!
//! Policy, in priority order:
//! 1. Either reflectance at or below the threshold means the vehicle has
//!    reached boundary tape: stop, maze complete.
//! 2. Otherwise tier on forward distance only:
//!    - at or beyond the forward clearance: drive forward
//!    - at or inside the backup distance: back up
//!    - anywhere between: turn right

use crate::action::Action;
use crate::config::NavigationConfig;
use crate::hardware::Measurement;

/// Outcome of one navigation decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    /// The action to apply this tick.
    pub action: Action,
    /// True once the maze end marker has been reached.
    pub completed: bool,
}

impl Decision {
    const fn moving(action: Action) -> Self {
        Self {
            action,
            completed: false,
        }
    }

    const fn complete() -> Self {
        Self {
            action: Action::Stop,
            completed: true,
        }
    }
}

/// Stateless per-tick navigation policy.
#[derive(Debug, Clone, Copy)]
pub struct DecisionEngine {
    config: NavigationConfig,
}

impl Default for DecisionEngine {
    fn default() -> Self {
        Self::new(NavigationConfig::default())
    }
}

impl DecisionEngine {
    /// Creates an engine using the given thresholds.
    #[must_use]
    pub const fn new(config: NavigationConfig) -> Self {
        Self { config }
    }

    /// The thresholds in use.
    #[must_use]
    pub const fn config(&self) -> &NavigationConfig {
        &self.config
    }

    /// Decides this tick's action.
    #[must_use]
    pub fn decide(&self, m: &Measurement) -> Decision {
        let threshold = self.config.reflectance_threshold;
        if m.left_reflectance <= threshold || m.right_reflectance <= threshold {
            return Decision::complete();
        }

        let action = if m.distance_mm >= self.config.forward_clearance_mm {
            Action::Forward
        } else if m.distance_mm <= self.config.backup_distance_mm {
            Action::Backup
        } else {
            // Between the bands, and NaN.
            Action::TurnRight
        };
        Decision::moving(action)
    }
}
