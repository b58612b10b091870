//! # mazerunner - navigation and replay core for a maze-solving robot
//!
//! Drives a two-wheeled vehicle through an unknown maze using a forward
//! distance sensor and two downward reflectance sensors, records what it did,
//! and replays the optimized run on a later session.
//!
//! ## Core Concepts
//!
//! - **Action**: one discrete drive command per tick
//! - **DecisionEngine**: stateless measurement → action policy
//! - **MovementLog**: append-only record of a solve session
//! - **RunSequence**: the optimized log, with every backup removed
//! - **ReplayEngine**: plays a stored run one action per tick
//! - **Session**: the host-owned context that ties them together
//!
//! ## Usage
//!
//! ```
//! use mazerunner::{
//!     Action, InMemoryRunStore, Measurement, NavigationConfig, RecordingActuator,
//!     ScriptedSensor, Session, SessionKind, SessionState,
//! };
//!
//! let sensors = ScriptedSensor::new(vec![
//!     Measurement::new(500.0, 4.0, 4.0),
//!     Measurement::new(500.0, 0.2, 4.0),
//! ]);
//! let mut session = Session::new(
//!     sensors,
//!     RecordingActuator::new(),
//!     InMemoryRunStore::new(),
//!     NavigationConfig::default(),
//! )?;
//!
//! session.begin(SessionKind::Solve)?;
//! assert_eq!(session.tick()?.action, Action::Forward);
//! assert_eq!(session.tick()?.state, SessionState::Complete);
//! # Ok::<(), mazerunner::MazeError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

pub mod action;
pub mod config;
pub mod error;
pub mod hardware;
pub mod logging;
pub mod mode;
pub mod movement;
pub mod navigation;
pub mod replay;
pub mod session;
pub mod storage;

// Re-export primary types at crate root for convenience
pub use action::{Action, UnknownAction, WheelSpeeds};
pub use config::NavigationConfig;
pub use error::{ConfigError, MazeError, MazeResult, PreconditionError, StorageError};
pub use hardware::{
    Actuator, AnalogChannel, AnalogSensors, Measurement, RecordingActuator, ScriptedSensor,
    SensorReader,
};
pub use logging::{init_logging, LogConfig, LogFormat};
pub use mode::{select_session_kind, SessionKind, UnknownMode};
pub use movement::{optimize, FrozenLog, LogState, MovementLog, RunSequence};
pub use navigation::{Decision, DecisionEngine};
pub use replay::{ReplayEngine, ReplayStep};
pub use session::{Session, SessionId, SessionState, TickOutcome};
pub use storage::{InMemoryRunStore, RunStore, StoredRun};

#[cfg(feature = "persistent")]
pub use storage::FileRunStore;
