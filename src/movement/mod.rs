//! Movement recording and post-solve optimization.
//!
//! A solve session appends one [`Action`](crate::Action) per tick to a
//! [`MovementLog`]. When the maze is complete the log is frozen and the
//! resulting [`FrozenLog`] is consumed by [`optimize`] to produce the
//! [`RunSequence`] that later replay sessions play back.

mod log;
mod optimizer;

pub use log::{FrozenLog, LogState, MovementLog};
pub use optimizer::{optimize, RunSequence};
