//! Sensor reading and voltage scaling.

use serde::{Deserialize, Serialize};

use crate::config::NavigationConfig;

/// One tick's sensor snapshot.
///
/// Values are taken as-is from hardware. Out-of-range or NaN readings are not
/// validated; the decision engine's comparisons stay total over them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Forward obstacle distance in millimeters.
    pub distance_mm: f64,
    /// Left downward reflectance, raw 0–5 V.
    pub left_reflectance: f64,
    /// Right downward reflectance, raw 0–5 V.
    pub right_reflectance: f64,
}

impl Measurement {
    /// Creates a measurement from already-scaled values.
    #[must_use]
    pub const fn new(distance_mm: f64, left_reflectance: f64, right_reflectance: f64) -> Self {
        Self {
            distance_mm,
            left_reflectance,
            right_reflectance,
        }
    }
}

/// Produces one [`Measurement`] per tick.
pub trait SensorReader {
    /// Samples all sensors. Called at most once per tick.
    fn read(&mut self) -> Measurement;
}

/// A raw analog input returning a voltage.
pub trait AnalogChannel {
    /// Current voltage on this channel.
    fn voltage(&mut self) -> f64;
}

impl<F: FnMut() -> f64> AnalogChannel for F {
    fn voltage(&mut self) -> f64 {
        self()
    }
}

/// Adapts three analog channels (distance, left and right reflectance) into a
/// [`SensorReader`].
#[derive(Debug)]
pub struct AnalogSensors<D, L, R> {
    distance: D,
    left: L,
    right: R,
    mm_per_volt: f64,
}

impl<D, L, R> AnalogSensors<D, L, R>
where
    D: AnalogChannel,
    L: AnalogChannel,
    R: AnalogChannel,
{
    /// Wires the three channels using the distance scale from `config`.
    #[must_use]
    pub fn new(distance: D, left: L, right: R, config: &NavigationConfig) -> Self {
        Self {
            distance,
            left,
            right,
            mm_per_volt: config.mm_per_volt,
        }
    }
}

impl<D, L, R> SensorReader for AnalogSensors<D, L, R>
where
    D: AnalogChannel,
    L: AnalogChannel,
    R: AnalogChannel,
{
    fn read(&mut self) -> Measurement {
        Measurement {
            distance_mm: self.distance.voltage() * self.mm_per_volt,
            left_reflectance: self.left.voltage(),
            right_reflectance: self.right.voltage(),
        }
    }
}

/// Replays a fixed list of measurements, one per read.
///
/// Once the script is exhausted the final measurement repeats. An empty script
/// reads as zero on every channel, which is boundary tape under both wheels.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSensor {
    script: Vec<Measurement>,
    cursor: usize,
    reads: usize,
}

impl ScriptedSensor {
    /// Creates a sensor that yields `script` in order.
    #[must_use]
    pub fn new(script: Vec<Measurement>) -> Self {
        Self {
            script,
            cursor: 0,
            reads: 0,
        }
    }

    /// Number of reads performed so far.
    #[must_use]
    pub const fn reads(&self) -> usize {
        self.reads
    }
}

impl SensorReader for ScriptedSensor {
    fn read(&mut self) -> Measurement {
        self.reads += 1;
        let Some(last) = self.script.len().checked_sub(1) else {
            return Measurement::new(0.0, 0.0, 0.0);
        };
        let m = self.script[self.cursor.min(last)];
        if self.cursor < last {
            self.cursor += 1;
        }
        m
    }
}
