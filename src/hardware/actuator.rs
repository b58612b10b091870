//! Motor output.

use crate::action::{Action, WheelSpeeds};

/// Drives the two wheel motors.
pub trait Actuator {
    /// Sets signed unit speeds on the left and right motor.
    fn drive(&mut self, left: f64, right: f64);

    /// Applies an action through its fixed wheel-speed mapping.
    fn apply(&mut self, action: Action) {
        let WheelSpeeds { left, right } = action.wheel_speeds();
        self.drive(f64::from(left), f64::from(right));
    }
}

impl<A: Actuator + ?Sized> Actuator for &mut A {
    fn drive(&mut self, left: f64, right: f64) {
        (**self).drive(left, right);
    }
}

/// Records every drive command instead of moving anything.
#[derive(Debug, Clone, Default)]
pub struct RecordingActuator {
    commands: Vec<(f64, f64)>,
}

impl RecordingActuator {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All `(left, right)` commands received, oldest first.
    #[must_use]
    pub fn commands(&self) -> &[(f64, f64)] {
        &self.commands
    }

    /// The most recent command, if any.
    #[must_use]
    pub fn last(&self) -> Option<(f64, f64)> {
        self.commands.last().copied()
    }

    /// Decodes recorded commands back into actions.
    ///
    /// Commands that match no action's mapping are skipped.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn actions(&self) -> Vec<Action> {
        self.commands
            .iter()
            .filter_map(|&(left, right)| {
                Action::ALL.into_iter().find(|a| {
                    let speeds = a.wheel_speeds();
                    f64::from(speeds.left) == left && f64::from(speeds.right) == right
                })
            })
            .collect()
    }
}

impl Actuator for RecordingActuator {
    fn drive(&mut self, left: f64, right: f64) {
        self.commands.push((left, right));
    }
}
