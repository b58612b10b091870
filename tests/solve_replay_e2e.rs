//! End-to-end solve → store → replay scenarios.

use std::sync::Arc;

use mazerunner::{
    Action, InMemoryRunStore, Measurement, NavigationConfig, RecordingActuator, RunStore,
    ScriptedSensor, Session, SessionKind, SessionState,
};

const OPEN: Measurement = Measurement::new(800.0, 3.5, 3.5);
const WALL: Measurement = Measurement::new(30.0, 3.5, 3.5);
const NEAR: Measurement = Measurement::new(150.0, 3.5, 3.5);
const TAPE: Measurement = Measurement::new(800.0, 3.5, 0.6);

fn run_to_completion<S, R>(session: &mut Session<S, RecordingActuator, R>) -> Vec<Action>
where
    S: mazerunner::SensorReader,
    R: RunStore,
{
    let mut actions = Vec::new();
    loop {
        let out = session.tick().unwrap();
        if out.state.is_finished() {
            return actions;
        }
        actions.push(out.action);
    }
}

#[test]
fn solve_then_replay_drops_backups_and_replays_verbatim() {
    let store = Arc::new(InMemoryRunStore::new());
    // Forward, Forward, Backup, TurnRight, Forward, then tape.
    let sensors = ScriptedSensor::new(vec![OPEN, OPEN, WALL, NEAR, OPEN, TAPE]);
    let mut solve = Session::new(
        sensors,
        RecordingActuator::new(),
        Arc::clone(&store),
        NavigationConfig::default(),
    )
    .unwrap();

    assert_eq!(solve.begin(SessionKind::Solve).unwrap(), SessionKind::Solve);
    let logged = run_to_completion(&mut solve);
    assert_eq!(
        logged,
        vec![
            Action::Forward,
            Action::Forward,
            Action::Backup,
            Action::TurnRight,
            Action::Forward
        ]
    );
    assert_eq!(solve.log().actions(), logged.as_slice());
    assert_eq!(solve.state(), SessionState::Complete);
    solve.end();

    let expected = [Action::Forward, Action::Forward, Action::TurnRight, Action::Forward];
    let stored = store.load().unwrap().unwrap();
    assert_eq!(stored.sequence.actions(), &expected);

    // A separate host context sharing only the store.
    let mut replay = Session::new(
        ScriptedSensor::default(),
        RecordingActuator::new(),
        Arc::clone(&store),
        NavigationConfig::default(),
    )
    .unwrap();
    assert_eq!(replay.begin(SessionKind::Replay).unwrap(), SessionKind::Replay);
    let played = run_to_completion(&mut replay);
    assert_eq!(played, expected);
    assert_eq!(replay.sensors().reads(), 0);

    assert_eq!(
        replay.motors().commands(),
        &[
            (1.0, -1.0),
            (1.0, -1.0),
            (-1.0, -1.0),
            (1.0, -1.0),
            (0.0, 0.0),
        ]
    );
}

#[test]
fn aborted_solve_keeps_previous_run() {
    let store = Arc::new(InMemoryRunStore::new());
    let mut session = Session::new(
        ScriptedSensor::new(vec![OPEN, TAPE]),
        RecordingActuator::new(),
        Arc::clone(&store),
        NavigationConfig::default(),
    )
    .unwrap();
    session.begin(SessionKind::Solve).unwrap();
    run_to_completion(&mut session);
    session.end();
    let before = store.load().unwrap().unwrap();
    assert_eq!(before.sequence.actions(), &[Action::Forward]);

    // Second solve never reaches tape before the host disables it.
    session.set_sensors(ScriptedSensor::new(vec![NEAR, NEAR, WALL])).unwrap();
    session.begin(SessionKind::Solve).unwrap();
    for _ in 0..3 {
        session.tick().unwrap();
    }
    assert_eq!(session.end(), SessionState::Solving);

    let after = store.load().unwrap().unwrap();
    assert_eq!(after, before);
}

#[test]
fn replay_request_with_only_backups_stored_falls_back_to_solve() {
    let store = Arc::new(InMemoryRunStore::new());
    let mut session = Session::new(
        ScriptedSensor::new(vec![WALL, WALL, TAPE]),
        RecordingActuator::new(),
        Arc::clone(&store),
        NavigationConfig::default(),
    )
    .unwrap();
    session.begin(SessionKind::Solve).unwrap();
    run_to_completion(&mut session);
    session.end();

    // The stored run is empty after optimization.
    assert!(store.load().unwrap().unwrap().sequence.is_empty());
    assert!(!store.has_run().unwrap());

    assert_eq!(session.begin(SessionKind::Replay).unwrap(), SessionKind::Solve);
    assert_eq!(session.state(), SessionState::Solving);
}

#[test]
fn new_solve_replaces_stored_run() {
    let store = Arc::new(InMemoryRunStore::new());
    let mut session = Session::new(
        ScriptedSensor::new(vec![OPEN, OPEN, TAPE]),
        RecordingActuator::new(),
        Arc::clone(&store),
        NavigationConfig::default(),
    )
    .unwrap();
    session.begin(SessionKind::Solve).unwrap();
    run_to_completion(&mut session);
    session.end();

    session.set_sensors(ScriptedSensor::new(vec![NEAR, TAPE])).unwrap();
    session.begin(SessionKind::Solve).unwrap();
    run_to_completion(&mut session);
    session.end();

    let stored = store.load().unwrap().unwrap();
    assert_eq!(stored.sequence.actions(), &[Action::TurnRight]);
}

#[test]
fn calibrated_threshold_changes_completion() {
    let config = NavigationConfig::from_json(r#"{"reflectance_threshold": 0.5}"#).unwrap();
    let mut session = Session::new(
        // 0.6 is tape at the default threshold but not at 0.5.
        ScriptedSensor::new(vec![TAPE, Measurement::new(800.0, 0.4, 3.5)]),
        RecordingActuator::new(),
        InMemoryRunStore::new(),
        config,
    )
    .unwrap();
    session.begin(SessionKind::Solve).unwrap();
    assert_eq!(session.tick().unwrap().action, Action::Forward);
    assert_eq!(session.tick().unwrap().state, SessionState::Complete);
}
