//! Board-agnostic core for pindrive
//!
//! This crate contains everything the drivers share that does not depend
//! on a specific connection:
//!
//! - Driver configuration types with their defaults
//! - Sensor events and the sinks that receive them
//! - The common [`traits::Driver`] interface
//! - Configuration persistence (with the `serde` feature)

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod events;
pub mod traits;
