//! Pin-level driver implementations
//!
//! This crate provides the drivers built on the connection traits from
//! pindrive-hal and the configuration and event types from pindrive-core:
//!
//! - Servo (range-clamped angle output)
//! - Analog sensor (polled reads with threshold events)

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod sensor;
pub mod servo;

pub use sensor::{AnalogSensor, SensorError};
pub use servo::{Servo, ServoError};
