//! Sensor driver implementations

pub mod analog;

pub use analog::{AnalogSensor, SensorError, ANALOG_SENSOR_COMMANDS};
