//! pindrive Hardware Abstraction Layer
//!
//! This crate defines the connection traits that the pindrive drivers
//! consume. A connection is whatever actually moves the signal on a pin:
//! a chip PWM slice, an ADC peripheral, a remote I/O expander, or a test
//! double.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  pindrive-drivers (Servo, AnalogSensor) │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  pindrive-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  embedded-hal │       │  board / mock │
//! │  PWM channel  │       │  connection   │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`pwm::ServoWrite`] - Fire-and-forget servo angle output
//! - [`adc::AnalogRead`] - Asynchronous single-shot analog read
//!
//! [`pwm::PwmServo`] adapts any `embedded_hal::pwm::SetDutyCycle` channel
//! into a [`pwm::ServoWrite`] connection.

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod pwm;

// Re-export key traits at crate root for convenience
pub use adc::AnalogRead;
pub use pwm::{PulseConfig, PwmServo, ServoWrite};
