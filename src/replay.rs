//! Replay engine.
//!
//! Plays back a stored [`RunSequence`] one action per tick. There is no sensor
//! feedback and no timing fidelity: each tick advances exactly one action,
//! regardless of how long that action lasted during the original solve.

use std::sync::Arc;

use crate::action::Action;
use crate::movement::RunSequence;

/// Outcome of one replay step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplayStep {
    /// The action to apply this tick.
    pub action: Action,
    /// True once the sequence is exhausted.
    pub finished: bool,
}

/// Cursor over a shared, read-only run.
#[derive(Debug, Clone)]
pub struct ReplayEngine {
    run: Arc<RunSequence>,
    cursor: usize,
}

impl ReplayEngine {
    /// Starts a replay at the beginning of `run`.
    #[must_use]
    pub const fn new(run: Arc<RunSequence>) -> Self {
        Self { run, cursor: 0 }
    }

    /// Returns the next action.
    ///
    /// At the end of the run this keeps returning `Stop` with `finished` set
    /// and the cursor stays put.
    pub fn step(&mut self) -> ReplayStep {
        match self.run.get(self.cursor) {
            Some(&action) => {
                self.cursor += 1;
                ReplayStep {
                    action,
                    finished: false,
                }
            }
            None => ReplayStep {
                action: Action::Stop,
                finished: true,
            },
        }
    }

    /// Number of actions already played.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.cursor
    }

    /// Actions left to play.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.run.len().saturating_sub(self.cursor)
    }

    /// Returns true once every action has been played.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.remaining() == 0
    }
}
