//! Abstract run store trait.
//!
//! A run store holds at most one optimized [`RunSequence`]. Replacing it is
//! all-or-nothing: readers see either the previous run or the new one, never a
//! partial write.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::error::StorageError;
use crate::movement::RunSequence;

/// A stored run together with the time it was saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredRun {
    /// The optimized actions.
    pub sequence: Arc<RunSequence>,
    /// When the run was stored.
    pub recorded_at: DateTime<Utc>,
}

/// Storage for the most recently optimized run.
pub trait RunStore: Send + Sync {
    /// Returns the stored run, if any.
    fn load(&self) -> Result<Option<StoredRun>, StorageError>;

    /// Atomically replaces the stored run.
    fn replace(&self, sequence: RunSequence) -> Result<(), StorageError>;

    /// Returns true if a run with at least one action is stored.
    fn has_run(&self) -> Result<bool, StorageError> {
        Ok(self.load()?.is_some_and(|run| !run.sequence.is_empty()))
    }
}

impl<S: RunStore + ?Sized> RunStore for Arc<S> {
    fn load(&self) -> Result<Option<StoredRun>, StorageError> {
        (**self).load()
    }

    fn replace(&self, sequence: RunSequence) -> Result<(), StorageError> {
        (**self).replace(sequence)
    }

    fn has_run(&self) -> Result<bool, StorageError> {
        (**self).has_run()
    }
}
