//! Driver traits
//!
//! These traits define what every pindrive driver exposes to the code that
//! owns it, independent of the connection behind it.

pub mod driver;

pub use driver::Driver;
