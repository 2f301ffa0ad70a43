//! Sensor events and event sinks
//!
//! Drivers report what they observe as [`SensorEvent`]s pushed into an
//! [`EventSink`]. The sink is the only thing a driver knows about its
//! owner.

pub mod event;
pub mod sink;

pub use event::SensorEvent;
pub use sink::{EventSink, FnSink};
