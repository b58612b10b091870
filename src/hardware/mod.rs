//! Capability interfaces for the vehicle's sensors and motors.
//!
//! The navigation core never talks to hardware directly. Drivers implement
//! [`AnalogChannel`] and [`Actuator`]; the core converts raw voltages into a
//! [`Measurement`] and maps each [`Action`](crate::Action) onto wheel speeds.
//!
//! [`ScriptedSensor`] and [`RecordingActuator`] stand in for real hardware in
//! tests and simulations.

mod actuator;
mod sensor;

pub use actuator::{Actuator, RecordingActuator};
pub use sensor::{AnalogChannel, AnalogSensors, Measurement, ScriptedSensor, SensorReader};
