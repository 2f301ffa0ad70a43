//! Servo driver with range-clamped angle output
//!
//! Every commanded angle is clamped into the configured range before it
//! reaches the connection, so a bad command can never drive the horn past
//! its mechanical stops.
//!
//! # Usage
//!
//! ```ignore
//! let config = ServoConfig::new("pan", 13)?.with_params(ServoParams::with_range(0, 180));
//! let mut servo = Servo::new(PwmServo::new(pwm_channel), &config);
//!
//! servo.angle(200)?;              // clamped to 180
//! assert_eq!(servo.current_angle(), 180);
//! ```

use heapless::String;

use pindrive_core::config::{AngleRange, ServoConfig, MAX_NAME_LEN};
use pindrive_core::traits::Driver;
use pindrive_hal::ServoWrite;

/// Commands a servo exposes
pub const SERVO_COMMANDS: &[&str] = &["angle", "currentAngle"];

/// Errors that can occur with servo operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ServoError<E> {
    /// The connection rejected the write
    Write(E),
}

/// Servo driver
///
/// Owns its connection. The pin is fixed at construction; the angle only
/// changes through [`Servo::angle`].
pub struct Servo<C> {
    connection: C,
    name: String<MAX_NAME_LEN>,
    pin: u8,
    /// Last committed angle (degrees)
    angle_value: i16,
    angle_range: AngleRange,
}

impl<C: ServoWrite> Servo<C> {
    /// Create a new servo driver
    ///
    /// Uses the configured range, or 30-150° when none is given. The
    /// initial angle is 0 and nothing is written until the first command.
    pub fn new(connection: C, config: &ServoConfig) -> Self {
        Self {
            connection,
            name: config.name.clone(),
            pin: config.device.pin,
            angle_value: 0,
            angle_range: config.params.resolved_range(),
        }
    }

    /// Move the servo
    ///
    /// Clamps `value` into range, writes the clamped angle to the
    /// connection once, then records it. A failed write leaves the recorded
    /// angle unchanged.
    pub fn angle(&mut self, value: i16) -> Result<(), ServoError<C::Error>> {
        let safe = self.safe_angle(value);

        #[cfg(feature = "defmt")]
        {
            if safe != value {
                defmt::debug!("servo {}: clamped {} to {}", self.name.as_str(), value, safe);
            }
        }

        if let Err(e) = self.connection.servo_write(self.pin, safe) {
            #[cfg(feature = "defmt")]
            defmt::warn!("servo {}: write to pin {} failed", self.name.as_str(), self.pin);
            return Err(ServoError::Write(e));
        }

        #[cfg(feature = "defmt")]
        defmt::trace!("servo {}: pin {} -> {}", self.name.as_str(), self.pin, safe);

        self.angle_value = safe;
        Ok(())
    }

    /// Get the last committed angle
    pub fn current_angle(&self) -> i16 {
        self.angle_value
    }

    /// Clamp an angle into the servo's range
    pub fn safe_angle(&self, value: i16) -> i16 {
        self.angle_range.clamp(value)
    }

    /// Get the allowed angle range
    pub fn angle_range(&self) -> AngleRange {
        self.angle_range
    }

    /// Replace the allowed angle range
    ///
    /// For calibration. The current angle is not re-clamped; the next
    /// command is.
    pub fn set_angle_range(&mut self, range: AngleRange) {
        self.angle_range = range;
    }

    /// Get access to the underlying connection
    pub fn connection(&self) -> &C {
        &self.connection
    }

    /// Release the connection
    pub fn release(self) -> C {
        self.connection
    }
}

impl<C> Driver for Servo<C> {
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn pin(&self) -> u8 {
        self.pin
    }

    fn commands(&self) -> &'static [&'static str] {
        SERVO_COMMANDS
    }
}
