//! Post-solve movement optimizer.

use std::ops::Deref;

use serde::Serialize;

use crate::action::Action;

/// An optimized action sequence ready for replay.
///
/// The only constructor is [`optimize`], so every `RunSequence` is the
/// filtered output of a movement log and never a hand-built list.
///
/// ```compile_fail
/// let run = mazerunner::RunSequence::default();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RunSequence {
    actions: Vec<Action>,
}

impl RunSequence {
    /// The actions to replay, in order.
    #[must_use]
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }
}

impl Deref for RunSequence {
    type Target = [Action];

    fn deref(&self) -> &Self::Target {
        &self.actions
    }
}

/// Compacts a movement log for replay.
///
/// Every `Backup` is dropped: it records a retry against an obstacle, not
/// progress toward the exit. All other actions keep their relative order; no
/// reordering, merging or deduplication happens and neighbors are never
/// inspected. Total over any input, including an empty one.
#[must_use]
pub fn optimize(log: &[Action]) -> RunSequence {
    RunSequence {
        actions: log
            .iter()
            .copied()
            .filter(|&action| action != Action::Backup)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Action::{Backup, Forward, Stop, TurnRight};

    #[test]
    fn test_drops_every_backup() {
        let run = optimize(&[Forward, Backup, Forward, Backup, TurnRight]);
        assert_eq!(run.actions(), &[Forward, Forward, TurnRight]);
    }

    #[test]
    fn test_empty_and_backup_only() {
        assert!(optimize(&[]).is_empty());
        assert!(optimize(&[Backup]).is_empty());
        assert!(optimize(&[Backup, Backup, Backup]).is_empty());
    }

    #[test]
    fn test_keeps_repeats_and_stops() {
        let log = [TurnRight, TurnRight, Stop, Forward, Forward];
        assert_eq!(optimize(&log).actions(), &log);
    }

    #[test]
    fn test_idempotent() {
        let once = optimize(&[Backup, Forward, TurnRight, Backup, Forward]);
        assert_eq!(optimize(&once), once);
    }

    #[test]
    fn test_serializes_as_label_list() {
        let run = optimize(&[Forward, Backup, TurnRight]);
        assert_eq!(serde_json::to_string(&run).unwrap(), r#"["FORWARD","RIGHT"]"#);
    }
}
