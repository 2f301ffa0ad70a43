//! Configuration types
//!
//! Driver configuration is resolved once, when a driver is constructed.
//! With the `serde` feature it can also be stored as postcard binary data.

pub mod board;
pub mod types;

#[cfg(feature = "serde")]
pub mod store;

pub use board::*;
pub use types::*;
