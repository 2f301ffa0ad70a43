//! Board-level configuration
//!
//! Groups every driver configured on one board so the whole set can be
//! stored, loaded and looked up by name.

use heapless::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::types::{AnalogSensorConfig, ConfigError, ServoConfig, Validate};

/// Maximum servos per board
pub const MAX_SERVOS: usize = 8;

/// Maximum analog sensors per board
pub const MAX_SENSORS: usize = 8;

/// Current configuration layout version
pub const CONFIG_VERSION: u8 = 1;

/// Complete board configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoardConfig {
    /// Configuration version for compatibility checks
    pub version: u8,
    /// Servo driver configurations
    pub servos: Vec<ServoConfig, MAX_SERVOS>,
    /// Analog sensor driver configurations
    pub sensors: Vec<AnalogSensorConfig, MAX_SENSORS>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            servos: Vec::new(),
            sensors: Vec::new(),
        }
    }
}

impl BoardConfig {
    /// Create a new empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a servo configuration
    pub fn add_servo(&mut self, config: ServoConfig) -> Result<(), ConfigError> {
        self.servos
            .push(config)
            .map_err(|_| ConfigError::TooManyDrivers)
    }

    /// Add an analog sensor configuration
    pub fn add_sensor(&mut self, config: AnalogSensorConfig) -> Result<(), ConfigError> {
        self.sensors
            .push(config)
            .map_err(|_| ConfigError::TooManyDrivers)
    }

    /// Find a servo by name
    pub fn find_servo(&self, name: &str) -> Option<&ServoConfig> {
        self.servos.iter().find(|s| s.name.as_str() == name)
    }

    /// Find an analog sensor by name
    pub fn find_sensor(&self, name: &str) -> Option<&AnalogSensorConfig> {
        self.sensors.iter().find(|s| s.name.as_str() == name)
    }

    /// Total number of configured drivers
    pub fn driver_count(&self) -> usize {
        self.servos.len() + self.sensors.len()
    }
}

impl Validate for BoardConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.version != CONFIG_VERSION {
            return Err(ConfigError::VersionMismatch);
        }

        for servo in &self.servos {
            servo.validate()?;
        }
        for sensor in &self.sensors {
            sensor.validate()?;
        }

        Ok(())
    }
}
