//! Autonomous session controller.
//!
//! A [`Session`] is the context object the host loop owns. It holds the
//! sensors, motors, run store and per-session state, and exposes one explicit
//! step function:
//!
//! ```text
//! begin(requested) ──► tick() ──► tick() ──► ... ──► end()
//!        │
//!        ├─ Solve:  Idle → Solving → Complete   (read, decide, log, drive)
//!        └─ Replay: Idle → Replaying → Done     (step, drive)
//! ```
//!
//! The session kind is chosen once in [`Session::begin`] and cannot change
//! until [`Session::end`].

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::action::Action;
use crate::config::NavigationConfig;
use crate::error::{MazeResult, PreconditionError};
use crate::hardware::{Actuator, SensorReader};
use crate::mode::{select_session_kind, SessionKind};
use crate::movement::MovementLog;
use crate::navigation::DecisionEngine;
use crate::replay::ReplayEngine;
use crate::storage::RunStore;

/// Unique identifier of one autonomous session, used to correlate logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Creates a new random session ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where the current session is in its lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SessionState {
    /// No session running.
    #[default]
    Idle,
    /// Navigating live and recording.
    Solving,
    /// Maze end reached; the run has been optimized and stored.
    Complete,
    /// Playing back a stored run.
    Replaying,
    /// Stored run fully played.
    Done,
}

impl SessionState {
    /// Returns true while a session is producing movements.
    #[must_use]
    pub const fn is_running(self) -> bool {
        matches!(self, Self::Solving | Self::Replaying)
    }

    /// Returns true once the session has nothing left to do.
    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Complete | Self::Done)
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Idle => "Idle",
            Self::Solving => "Solving",
            Self::Complete => "Complete",
            Self::Replaying => "Replaying",
            Self::Done => "Done",
        };
        f.write_str(s)
    }
}

/// What one tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    /// The action applied to the motors this tick.
    pub action: Action,
    /// Session state after the tick.
    pub state: SessionState,
}

#[derive(Debug)]
enum Active {
    Solve,
    Replay(ReplayEngine),
}

#[derive(Debug)]
struct ActiveSession {
    id: SessionId,
    kind: SessionKind,
    engine: Active,
}

/// Host-owned context for autonomous sessions.
#[derive(Debug)]
pub struct Session<S, A, R> {
    sensors: S,
    motors: A,
    store: R,
    navigator: DecisionEngine,
    log: MovementLog,
    state: SessionState,
    active: Option<ActiveSession>,
}

impl<S, A, R> Session<S, A, R>
where
    S: SensorReader,
    A: Actuator,
    R: RunStore,
{
    /// Builds a session context.
    ///
    /// # Errors
    /// Returns a configuration error if `config` fails validation.
    pub fn new(sensors: S, motors: A, store: R, config: NavigationConfig) -> MazeResult<Self> {
        let config = config.validate()?;
        Ok(Self {
            sensors,
            motors,
            store,
            navigator: DecisionEngine::new(config),
            log: MovementLog::new(),
            state: SessionState::Idle,
            active: None,
        })
    }

    /// Starts an autonomous session.
    ///
    /// `Replay` falls back to `Solve` when no non-empty run is stored or the
    /// store cannot be read. A solve never consults the store. A finished
    /// session may be followed directly by a new one; a running one must be
    /// [`end`](Self::end)ed first.
    ///
    /// # Errors
    /// `SessionAlreadyActive` if a session is still running.
    pub fn begin(&mut self, requested: SessionKind) -> MazeResult<SessionKind> {
        if self.state.is_running() {
            tracing::error!(state = %self.state, "begin called while a session is running");
            return Err(PreconditionError::SessionAlreadyActive { state: self.state }.into());
        }

        let stored = match requested {
            SessionKind::Solve => None,
            SessionKind::Replay => self.store.load().unwrap_or_else(|err| {
                tracing::warn!(error = %err, "stored run unreadable");
                None
            }),
        };
        let has_stored_run = stored.as_ref().is_some_and(|run| !run.sequence.is_empty());
        let kind = select_session_kind(requested, has_stored_run);
        if kind != requested {
            tracing::warn!(requested = %requested, "no stored run; falling back to solve");
        }

        let id = SessionId::new();
        let engine = match (kind, stored) {
            (SessionKind::Replay, Some(run)) => {
                tracing::info!(
                    session = %id,
                    actions = run.sequence.len(),
                    recorded_at = %run.recorded_at,
                    "starting replay"
                );
                self.state = SessionState::Replaying;
                Active::Replay(ReplayEngine::new(Arc::clone(&run.sequence)))
            }
            _ => {
                tracing::info!(session = %id, "starting solve");
                self.log.clear();
                self.state = SessionState::Solving;
                Active::Solve
            }
        };

        self.active = Some(ActiveSession { id, kind, engine });
        Ok(kind)
    }

    /// Runs one control tick.
    ///
    /// # Errors
    /// - `NoActiveSession` if [`begin`](Self::begin) was not called
    /// - movement log precondition violations
    /// - storage errors while saving a completed run; the session is still
    ///   `Complete` and the motors are stopped
    pub fn tick(&mut self) -> MazeResult<TickOutcome> {
        let Some(active) = self.active.as_mut() else {
            tracing::error!("tick called with no active session");
            return Err(PreconditionError::NoActiveSession.into());
        };

        let action = match (&mut active.engine, self.state) {
            (Active::Solve, SessionState::Solving) => {
                let measurement = self.sensors.read();
                let decision = self.navigator.decide(&measurement);
                if decision.completed {
                    self.motors.apply(Action::Stop);
                    let frozen = self.log.freeze()?;
                    self.state = SessionState::Complete;
                    tracing::info!(session = %active.id, movements = frozen.len(), "maze complete");

                    let run = frozen.optimize();
                    let kept = run.len();
                    self.store.replace(run)?;
                    tracing::info!(session = %active.id, actions = kept, "optimized run saved");
                } else {
                    self.log.append(decision.action)?;
                    self.motors.apply(decision.action);
                    tracing::trace!(
                        distance_mm = measurement.distance_mm,
                        action = %decision.action,
                        "navigate"
                    );
                }
                decision.action
            }
            (Active::Replay(replay), SessionState::Replaying) => {
                let step = replay.step();
                self.motors.apply(step.action);
                if step.finished {
                    self.state = SessionState::Done;
                    tracing::info!(session = %active.id, played = replay.position(), "replay complete");
                }
                step.action
            }
            (Active::Replay(_), _) => {
                self.motors.apply(Action::Stop);
                Action::Stop
            }
            // Solve already complete; the motors were stopped on the completing tick.
            (Active::Solve, _) => Action::Stop,
        };

        Ok(TickOutcome {
            action,
            state: self.state,
        })
    }

    /// Ends the current session, as when the host disables autonomy.
    ///
    /// A solve that never completed is discarded: its log is dropped and
    /// nothing reaches the run store. Returns the state the session was in.
    pub fn end(&mut self) -> SessionState {
        let previous = self.state;
        if let Some(active) = self.active.take() {
            match previous {
                SessionState::Solving => {
                    tracing::warn!(
                        session = %active.id,
                        movements = self.log.len(),
                        "solve aborted before completion; discarding movements"
                    );
                    self.log = MovementLog::new();
                }
                SessionState::Replaying => {
                    tracing::info!(session = %active.id, "replay aborted");
                }
                _ => tracing::debug!(session = %active.id, state = %previous, "session ended"),
            }
            self.motors.apply(Action::Stop);
        }
        self.state = SessionState::Idle;
        previous
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Kind of the running session, if any.
    #[must_use]
    pub fn kind(&self) -> Option<SessionKind> {
        self.active.as_ref().map(|a| a.kind)
    }

    /// ID of the running session, if any.
    #[must_use]
    pub fn session_id(&self) -> Option<SessionId> {
        self.active.as_ref().map(|a| a.id)
    }

    /// The current solve's movement log.
    #[must_use]
    pub const fn log(&self) -> &MovementLog {
        &self.log
    }

    /// The sensor reader.
    #[must_use]
    pub const fn sensors(&self) -> &S {
        &self.sensors
    }

    /// Replaces the sensor reader, e.g. to swap in a new course between sessions.
    ///
    /// # Errors
    /// `SessionAlreadyActive` while a session is running; the reader is kept.
    pub fn set_sensors(&mut self, sensors: S) -> MazeResult<()> {
        if self.state.is_running() {
            tracing::error!(state = %self.state, "sensor swap rejected while a session is running");
            return Err(PreconditionError::SessionAlreadyActive { state: self.state }.into());
        }
        self.sensors = sensors;
        Ok(())
    }

    /// The motor actuator.
    #[must_use]
    pub const fn motors(&self) -> &A {
        &self.motors
    }

    /// The run store.
    #[must_use]
    pub const fn store(&self) -> &R {
        &self.store
    }
}
