//! Events emitted by analog sensor drivers

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Named event carrying the reading that caused it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SensorEvent {
    /// A read completed (emitted for every reading)
    AnalogRead(i32),
    /// Reading was strictly below the lower limit
    LowerLimit(i32),
    /// Reading was strictly above the upper limit
    UpperLimit(i32),
}

impl SensorEvent {
    /// Event name as seen by listeners
    pub fn name(&self) -> &'static str {
        match self {
            SensorEvent::AnalogRead(_) => "analogRead",
            SensorEvent::LowerLimit(_) => "lowerLimit",
            SensorEvent::UpperLimit(_) => "upperLimit",
        }
    }

    /// The reading carried by this event
    pub fn value(&self) -> i32 {
        match *self {
            SensorEvent::AnalogRead(v) | SensorEvent::LowerLimit(v) | SensorEvent::UpperLimit(v) => v,
        }
    }

    /// Check if this event reports a limit crossing
    pub fn is_threshold(&self) -> bool {
        matches!(self, SensorEvent::LowerLimit(_) | SensorEvent::UpperLimit(_))
    }
}
