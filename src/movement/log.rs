//! Append-only movement log for a solve session.

use std::ops::Deref;

use crate::action::Action;
use crate::error::PreconditionError;

use super::optimizer::{optimize, RunSequence};

/// Lifecycle of a [`MovementLog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogState {
    /// Not yet cleared for a solve session; appends are rejected.
    Uncleared,
    /// Accepting one action per tick.
    Recording,
    /// Maze completed; the log is read-only.
    Frozen,
}

/// Ordered record of the actions taken during one solve session.
///
/// A fresh log must be [`clear`](Self::clear)ed before it accepts actions, and
/// becomes immutable once [`freeze`](Self::freeze)d. Both rules are enforced:
/// violating them returns a [`PreconditionError`] and leaves the log untouched,
/// so a stale log can never leak movements into a later session.
#[derive(Debug, Clone)]
pub struct MovementLog {
    actions: Vec<Action>,
    state: LogState,
}

impl Default for MovementLog {
    fn default() -> Self {
        Self::new()
    }
}

impl MovementLog {
    /// Creates an uncleared log.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            actions: Vec::new(),
            state: LogState::Uncleared,
        }
    }

    /// Empties the log and starts recording. Called once at solve session start.
    pub fn clear(&mut self) {
        self.actions.clear();
        self.state = LogState::Recording;
    }

    /// Records one action.
    ///
    /// # Errors
    /// - `LogNotCleared`: the log was never cleared for this session
    /// - `LogFrozen`: the log has already been frozen
    pub fn append(&mut self, action: Action) -> Result<(), PreconditionError> {
        match self.state {
            LogState::Recording => {
                self.actions.push(action);
                Ok(())
            }
            LogState::Uncleared => Err(PreconditionError::LogNotCleared),
            LogState::Frozen => Err(PreconditionError::LogFrozen),
        }
    }

    /// Marks the log complete and hands out its contents for optimization.
    ///
    /// # Errors
    /// - `LogNotCleared`: the log was never recording
    /// - `LogAlreadyFrozen`: `freeze` was already called this session
    pub fn freeze(&mut self) -> Result<FrozenLog, PreconditionError> {
        match self.state {
            LogState::Recording => {
                self.state = LogState::Frozen;
                Ok(FrozenLog {
                    actions: self.actions.clone(),
                })
            }
            LogState::Uncleared => Err(PreconditionError::LogNotCleared),
            LogState::Frozen => Err(PreconditionError::LogAlreadyFrozen),
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> LogState {
        self.state
    }

    /// Actions recorded so far.
    #[must_use]
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Number of recorded actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

/// The contents of a completed log.
///
/// Only [`MovementLog::freeze`] produces one, so holding a `FrozenLog` proves
/// the solve reached completion. Optimizing consumes it, and it cannot be
/// cloned, so a completed log is optimized at most once.
///
/// ```compile_fail
/// fn optimize_twice(frozen: mazerunner::FrozenLog) {
///     let _ = frozen.clone().optimize();
///     let _ = frozen.optimize();
/// }
/// ```
#[derive(Debug, PartialEq, Eq)]
pub struct FrozenLog {
    actions: Vec<Action>,
}

impl FrozenLog {
    /// Runs the optimizer over the completed log.
    #[must_use]
    pub fn optimize(self) -> RunSequence {
        optimize(&self.actions)
    }
}

impl Deref for FrozenLog {
    type Target = [Action];

    fn deref(&self) -> &Self::Target {
        &self.actions
    }
}
