//! Durable run store backend.
//!
//! The run lives in a single snapshot file:
//!
//! ```text
//! [magic "MAZE"][version u8][version u8][len u32 LE][RunRecord JSON][crc32 u32 LE]
//! ```
//!
//! Every replace writes a fresh temporary sibling, fsyncs it, and renames it
//! over the snapshot. A crash mid-write leaves the previous snapshot intact.

mod codec;

use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::action::Action;
use crate::error::StorageError;
use crate::movement::{optimize, RunSequence};
use crate::storage::traits::{RunStore, StoredRun};

/// On-disk form of a stored run.
#[derive(Debug, Serialize, Deserialize)]
struct RunRecord {
    actions: Vec<Action>,
    recorded_at: DateTime<Utc>,
}

/// File-backed [`RunStore`].
///
/// The snapshot is read once on [`open`](Self::open) and cached; loads are
/// served from the cache.
#[derive(Debug)]
pub struct FileRunStore {
    path: PathBuf,
    current: RwLock<Option<StoredRun>>,
}

impl FileRunStore {
    /// Opens the snapshot at `path`. A missing file is an empty store.
    ///
    /// # Errors
    /// - `Corrupt` / `UnsupportedVersion` if the snapshot fails validation
    /// - `Io` if the file exists but cannot be read
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref().to_path_buf();
        let current = read_snapshot(&path)?;
        if let Some(run) = &current {
            tracing::debug!(
                path = %path.display(),
                actions = run.sequence.len(),
                "loaded stored run"
            );
        }
        Ok(Self {
            path,
            current: RwLock::new(current),
        })
    }

    /// Snapshot file location.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RunStore for FileRunStore {
    fn load(&self) -> Result<Option<StoredRun>, StorageError> {
        let guard = self
            .current
            .read()
            .map_err(|_| StorageError::PoisonedLock("snapshot read"))?;
        Ok(guard.clone())
    }

    fn replace(&self, sequence: RunSequence) -> Result<(), StorageError> {
        // Held across the write so concurrent replaces cannot interleave renames.
        let mut guard = self
            .current
            .write()
            .map_err(|_| StorageError::PoisonedLock("snapshot write"))?;

        let run = StoredRun {
            sequence: Arc::new(sequence),
            recorded_at: Utc::now(),
        };
        write_snapshot(&self.path, &run)?;
        *guard = Some(run);
        Ok(())
    }
}

fn read_snapshot(path: &Path) -> Result<Option<StoredRun>, StorageError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    let mut reader = BufReader::new(file);
    codec::read_header(&mut reader)?;
    let record: RunRecord = codec::decode(&mut reader)?;

    // Snapshots hold optimizer output, so filtering again is a no-op.
    Ok(Some(StoredRun {
        sequence: Arc::new(optimize(&record.actions)),
        recorded_at: record.recorded_at,
    }))
}

fn write_snapshot(path: &Path, run: &StoredRun) -> Result<(), StorageError> {
    let record = RunRecord {
        actions: run.sequence.actions().to_vec(),
        recorded_at: run.recorded_at,
    };
    let bytes = codec::encode(&record)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension(format!("tmp.{}", Uuid::new_v4()));
    let result = write_temp(&temp_path, &bytes).and_then(|()| {
        fs::rename(&temp_path, path)?;
        Ok(())
    });
    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

fn write_temp(temp_path: &Path, record: &[u8]) -> Result<(), StorageError> {
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(temp_path)?;
    let mut writer = BufWriter::new(file);
    codec::write_header(&mut writer)?;
    writer.write_all(record)?;
    writer.flush()?;
    writer.get_ref().sync_all()?;
    Ok(())
}
