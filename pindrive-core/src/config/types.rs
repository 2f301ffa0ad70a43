//! Driver configuration type definitions
//!
//! Every driver is built from a [`DriverConfig`]: a name, the device
//! descriptor (the pin it drives) and a driver-specific parameter block.
//! Parameters are optional overrides; anything left unset falls back to the
//! documented default when the driver is constructed.

use heapless::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum driver name length
pub const MAX_NAME_LEN: usize = 16;

/// Default lowest servo angle (degrees)
pub const DEFAULT_ANGLE_MIN: i16 = 30;

/// Default highest servo angle (degrees)
pub const DEFAULT_ANGLE_MAX: i16 = 150;

/// Default analog lower limit
pub const DEFAULT_LOWER_LIMIT: i32 = 0;

/// Default analog upper limit
pub const DEFAULT_UPPER_LIMIT: i32 = 256;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Angle range has `min > max`
    InvalidRange,
    /// Sensor limits have `lower > upper`
    InvalidLimits,
    /// Driver name exceeds [`MAX_NAME_LEN`]
    NameTooLong,
    /// Too many drivers (exceeded heapless capacity)
    TooManyDrivers,
    /// Config version mismatch
    VersionMismatch,
    /// Serialization failed (buffer too small)
    Serialize,
    /// Deserialization failed
    Deserialize,
}

/// Checks a configuration for values no driver can honour
pub trait Validate {
    /// Return the first problem found, if any
    fn validate(&self) -> Result<(), ConfigError>;
}

/// Device descriptor: where the driver is attached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DeviceConfig {
    /// Pin number on the driver's connection
    pub pin: u8,
}

impl DeviceConfig {
    /// Create a device descriptor for a pin
    pub const fn new(pin: u8) -> Self {
        Self { pin }
    }
}

/// Driver configuration record
///
/// `P` is the driver-specific parameter block ([`ServoParams`],
/// [`AnalogSensorParams`]).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DriverConfig<P> {
    /// Driver name (e.g., "pan", "light")
    pub name: String<MAX_NAME_LEN>,
    /// Device descriptor
    pub device: DeviceConfig,
    /// Optional driver parameters
    pub params: P,
}

impl<P: Default> DriverConfig<P> {
    /// Create a config with default parameters
    ///
    /// Fails with [`ConfigError::NameTooLong`] if `name` does not fit.
    pub fn new(name: &str, pin: u8) -> Result<Self, ConfigError> {
        let mut label = String::new();
        label
            .push_str(name)
            .map_err(|_| ConfigError::NameTooLong)?;

        Ok(Self {
            name: label,
            device: DeviceConfig::new(pin),
            params: P::default(),
        })
    }
}

impl<P> DriverConfig<P> {
    /// Replace the parameter block
    pub fn with_params(mut self, params: P) -> Self {
        self.params = params;
        self
    }

    /// Get the configured pin
    pub fn pin(&self) -> u8 {
        self.device.pin
    }
}

impl<P: Validate> Validate for DriverConfig<P> {
    fn validate(&self) -> Result<(), ConfigError> {
        self.params.validate()
    }
}

/// Closed interval of allowed servo angles (degrees)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AngleRange {
    /// Lowest allowed angle
    pub min: i16,
    /// Highest allowed angle
    pub max: i16,
}

impl Default for AngleRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_ANGLE_MIN,
            max: DEFAULT_ANGLE_MAX,
        }
    }
}

impl AngleRange {
    /// Create a range, rejecting `min > max`
    pub fn new(min: i16, max: i16) -> Result<Self, ConfigError> {
        let range = Self { min, max };
        range.validate()?;
        Ok(range)
    }

    /// Clamp an angle into the range
    ///
    /// Below `min` gives `min`, above `max` gives `max`, anything else is
    /// returned unchanged. Never panics, even on an inverted range.
    pub fn clamp(&self, angle: i16) -> i16 {
        if angle < self.min {
            self.min
        } else if angle > self.max {
            self.max
        } else {
            angle
        }
    }

    /// Check if an angle lies inside the range (inclusive)
    pub fn contains(&self, angle: i16) -> bool {
        angle >= self.min && angle <= self.max
    }
}

impl Validate for AngleRange {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.min > self.max {
            return Err(ConfigError::InvalidRange);
        }
        Ok(())
    }
}

/// Threshold pair for analog readings
///
/// Limits only classify readings; they never clamp them. Both bounds are
/// exclusive: a reading equal to a limit is not a crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SensorLimits {
    /// Readings strictly below this are reported
    pub lower: i32,
    /// Readings strictly above this are reported
    pub upper: i32,
}

impl Default for SensorLimits {
    fn default() -> Self {
        Self {
            lower: DEFAULT_LOWER_LIMIT,
            upper: DEFAULT_UPPER_LIMIT,
        }
    }
}

impl SensorLimits {
    /// Check if a reading crossed the lower limit
    pub fn is_below(&self, value: i32) -> bool {
        value < self.lower
    }

    /// Check if a reading crossed the upper limit
    pub fn is_above(&self, value: i32) -> bool {
        value > self.upper
    }
}

impl Validate for SensorLimits {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.lower > self.upper {
            return Err(ConfigError::InvalidLimits);
        }
        Ok(())
    }
}

/// Servo driver parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ServoParams {
    /// Allowed angle range (defaults to 30-150°)
    pub range: Option<AngleRange>,
}

impl ServoParams {
    /// Override the angle range
    pub fn with_range(min: i16, max: i16) -> Self {
        Self {
            range: Some(AngleRange { min, max }),
        }
    }

    /// The range the driver will use
    pub fn resolved_range(&self) -> AngleRange {
        self.range.unwrap_or_default()
    }
}

impl Validate for ServoParams {
    fn validate(&self) -> Result<(), ConfigError> {
        self.resolved_range().validate()
    }
}

/// Analog sensor driver parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnalogSensorParams {
    /// Upper limit (defaults to 256)
    pub upper_limit: Option<i32>,
    /// Lower limit (defaults to 0)
    pub lower_limit: Option<i32>,
}

impl AnalogSensorParams {
    /// Override both limits
    pub fn with_limits(lower: i32, upper: i32) -> Self {
        Self {
            upper_limit: Some(upper),
            lower_limit: Some(lower),
        }
    }

    /// The limits the driver will use
    pub fn resolved_limits(&self) -> SensorLimits {
        let defaults = SensorLimits::default();
        SensorLimits {
            lower: self.lower_limit.unwrap_or(defaults.lower),
            upper: self.upper_limit.unwrap_or(defaults.upper),
        }
    }
}

impl Validate for AnalogSensorParams {
    fn validate(&self) -> Result<(), ConfigError> {
        self.resolved_limits().validate()
    }
}

/// Servo driver configuration
pub type ServoConfig = DriverConfig<ServoParams>;

/// Analog sensor driver configuration
pub type AnalogSensorConfig = DriverConfig<AnalogSensorParams>;
