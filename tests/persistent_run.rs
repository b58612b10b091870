//! Crash and corruption behavior of the file-backed run store.
//!
//! These tests verify that the snapshot file:
//! - survives process restarts
//! - never exposes a half-written run
//! - rejects corrupted or foreign files

#![cfg(feature = "persistent")]

use std::fs;
use std::io::Write;

use mazerunner::{
    Action, FileRunStore, Measurement, NavigationConfig, RecordingActuator, RunStore,
    ScriptedSensor, Session, SessionKind, StorageError,
};
use tempfile::tempdir;

fn solve_into(store: FileRunStore, script: Vec<Measurement>) -> FileRunStore {
    let mut session = Session::new(
        ScriptedSensor::new(script),
        RecordingActuator::new(),
        store,
        NavigationConfig::default(),
    )
    .unwrap();
    session.begin(SessionKind::Solve).unwrap();
    while !session.tick().unwrap().state.is_finished() {}
    session.end();
    let path = session.store().path().to_path_buf();
    FileRunStore::open(path).unwrap()
}

#[test]
fn test_run_survives_restart_and_replays() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("last_run.maze");

    let store = FileRunStore::open(&path).unwrap();
    let _ = solve_into(
        store,
        vec![
            Measurement::new(400.0, 4.0, 4.0),
            Measurement::new(10.0, 4.0, 4.0),
            Measurement::new(100.0, 4.0, 4.0),
            Measurement::new(400.0, 0.5, 0.5),
        ],
    );

    // Fresh process: reopen and replay.
    let reopened = FileRunStore::open(&path).unwrap();
    let mut session = Session::new(
        ScriptedSensor::default(),
        RecordingActuator::new(),
        reopened,
        NavigationConfig::default(),
    )
    .unwrap();
    assert_eq!(session.begin(SessionKind::Replay).unwrap(), SessionKind::Replay);
    while !session.tick().unwrap().state.is_finished() {}
    assert_eq!(
        session.motors().actions(),
        vec![Action::Forward, Action::TurnRight, Action::Stop]
    );
}

#[test]
fn test_truncated_snapshot_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("last_run.maze");
    let store = FileRunStore::open(&path).unwrap();
    let _ = solve_into(
        store,
        vec![Measurement::new(400.0, 4.0, 4.0), Measurement::new(400.0, 0.5, 4.0)],
    );

    let file = fs::OpenOptions::new().write(true).open(&path).unwrap();
    let size = file.metadata().unwrap().len();
    file.set_len(size - 3).unwrap();

    let err = FileRunStore::open(&path).unwrap_err();
    assert!(matches!(err, StorageError::Corrupt(_)), "got {err:?}");
}

#[test]
fn test_foreign_file_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("last_run.maze");
    let mut file = fs::File::create(&path).unwrap();
    file.write_all(b"[\"FORWARD\",\"RIGHT\"]").unwrap();
    drop(file);

    let err = FileRunStore::open(&path).unwrap_err();
    assert!(matches!(err, StorageError::Corrupt(_)), "got {err:?}");
}

#[test]
fn test_stale_temp_file_does_not_affect_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("last_run.maze");
    let store = FileRunStore::open(&path).unwrap();
    let store = solve_into(
        store,
        vec![Measurement::new(400.0, 4.0, 4.0), Measurement::new(400.0, 0.5, 4.0)],
    );
    let before = store.load().unwrap().unwrap();

    // Simulate a crash that left a partial temp file next to the snapshot.
    fs::write(dir.path().join("last_run.tmp.crashed"), b"MAZE\x01\x01\xff").unwrap();

    let reopened = FileRunStore::open(&path).unwrap();
    assert_eq!(reopened.load().unwrap().unwrap(), before);
    assert!(reopened.has_run().unwrap());
}
