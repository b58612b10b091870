//! In-memory run store.
//!
//! Holds the run for the lifetime of the process. Intended for embedded use,
//! tests, and as the reference implementation of [`RunStore`].

use std::sync::{Arc, RwLock};

use chrono::Utc;

use crate::error::StorageError;
use crate::movement::RunSequence;
use crate::storage::traits::{RunStore, StoredRun};

fn lock_err(context: &'static str) -> StorageError {
    StorageError::PoisonedLock(context)
}

/// Thread-safe in-memory [`RunStore`].
#[derive(Debug, Default)]
pub struct InMemoryRunStore {
    current: RwLock<Option<StoredRun>>,
}

impl InMemoryRunStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl RunStore for InMemoryRunStore {
    fn load(&self) -> Result<Option<StoredRun>, StorageError> {
        let guard = self.current.read().map_err(|_| lock_err("run read"))?;
        Ok(guard.clone())
    }

    fn replace(&self, sequence: RunSequence) -> Result<(), StorageError> {
        let run = StoredRun {
            sequence: Arc::new(sequence),
            recorded_at: Utc::now(),
        };
        // Built fully before the lock is taken; the swap is a single assignment.
        let mut guard = self.current.write().map_err(|_| lock_err("run write"))?;
        *guard = Some(run);
        Ok(())
    }
}
