//! PWM servo output abstractions
//!
//! Provides the write primitive used by servo drivers, plus an adapter
//! for plain `embedded-hal` PWM channels.

use embedded_hal::pwm::SetDutyCycle;

/// Servo output connection
///
/// Fire-and-forget from the driver's point of view: the connection turns
/// the angle into whatever pulse train its hardware needs.
pub trait ServoWrite {
    /// Error type for write operations
    type Error;

    /// Command the servo on `pin` to `angle` degrees
    ///
    /// # Arguments
    /// * `pin` - Pin number on this connection
    /// * `angle` - Target angle in whole degrees
    fn servo_write(&mut self, pin: u8, angle: i16) -> Result<(), Self::Error>;
}

impl<T: ServoWrite + ?Sized> ServoWrite for &mut T {
    type Error = T::Error;

    fn servo_write(&mut self, pin: u8, angle: i16) -> Result<(), Self::Error> {
        (**self).servo_write(pin, angle)
    }
}

/// Hobby servo pulse timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PulseConfig {
    /// Pulse width at 0° in microseconds
    pub min_pulse_us: u16,
    /// Pulse width at full travel in microseconds
    pub max_pulse_us: u16,
    /// PWM frame length in microseconds (20 000 = 50 Hz)
    pub period_us: u32,
    /// Full mechanical travel in degrees
    pub travel_deg: u16,
}

impl Default for PulseConfig {
    fn default() -> Self {
        Self {
            min_pulse_us: 500,
            max_pulse_us: 2500,
            period_us: 20_000,
            travel_deg: 180,
        }
    }
}

impl PulseConfig {
    /// Pulse width in microseconds for an angle
    ///
    /// Angles outside `[0, travel_deg]` are pinned to the nearest end.
    pub fn pulse_us(&self, angle: i16) -> u32 {
        let travel = self.travel_deg as i32;
        let angle = (angle as i32).clamp(0, travel) as u32;
        let span = self.max_pulse_us.saturating_sub(self.min_pulse_us) as u32;

        if travel == 0 {
            return self.min_pulse_us as u32;
        }

        self.min_pulse_us as u32 + angle * span / travel as u32
    }

    /// Duty cycle value for an angle, given the channel's maximum duty
    pub fn duty(&self, angle: i16, max_duty: u16) -> u16 {
        if self.period_us == 0 {
            return 0;
        }

        let duty = self.pulse_us(angle) as u64 * max_duty as u64 / self.period_us as u64;
        duty.min(max_duty as u64) as u16
    }
}

/// Servo connection backed by an `embedded-hal` PWM channel
///
/// One channel drives one servo, so the `pin` passed to
/// [`ServoWrite::servo_write`] is not used for routing; the channel was
/// bound to its pin when the chip HAL created it.
pub struct PwmServo<P> {
    channel: P,
    pulse: PulseConfig,
}

impl<P: SetDutyCycle> PwmServo<P> {
    /// Wrap a PWM channel with default hobby servo timing (500-2500 µs, 50 Hz)
    pub fn new(channel: P) -> Self {
        Self::with_pulse(channel, PulseConfig::default())
    }

    /// Wrap a PWM channel with custom pulse timing
    pub fn with_pulse(channel: P, pulse: PulseConfig) -> Self {
        Self { channel, pulse }
    }

    /// Get the pulse timing
    pub fn pulse(&self) -> &PulseConfig {
        &self.pulse
    }

    /// Release the underlying channel
    pub fn into_inner(self) -> P {
        self.channel
    }
}

impl<P: SetDutyCycle> ServoWrite for PwmServo<P> {
    type Error = P::Error;

    fn servo_write(&mut self, _pin: u8, angle: i16) -> Result<(), Self::Error> {
        let duty = self.pulse.duty(angle, self.channel.max_duty_cycle());
        self.channel.set_duty_cycle(duty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::pwm::ErrorType;

    /// Channel whose duty range equals the 20 ms frame in µs,
    /// so duty values read directly as pulse widths.
    struct MockChannel {
        duty: u16,
    }

    impl ErrorType for MockChannel {
        type Error = Infallible;
    }

    impl SetDutyCycle for MockChannel {
        fn max_duty_cycle(&self) -> u16 {
            20_000
        }

        fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
            self.duty = duty;
            Ok(())
        }
    }

    #[test]
    fn test_pulse_width_endpoints() {
        let pulse = PulseConfig::default();
        assert_eq!(pulse.pulse_us(0), 500);
        assert_eq!(pulse.pulse_us(90), 1500);
        assert_eq!(pulse.pulse_us(180), 2500);
    }

    #[test]
    fn test_pulse_width_pinned_to_travel() {
        let pulse = PulseConfig::default();
        assert_eq!(pulse.pulse_us(-45), 500);
        assert_eq!(pulse.pulse_us(270), 2500);
    }

    #[test]
    fn test_duty_scales_with_channel_resolution() {
        let pulse = PulseConfig::default();
        // 1.5 ms of a 20 ms frame on a 16-bit channel
        assert_eq!(pulse.duty(90, 65_535), 4915);
        assert_eq!(pulse.duty(90, 20_000), 1500);
    }

    #[test]
    fn test_pwm_servo_writes_duty() {
        let mut servo = PwmServo::new(MockChannel { duty: 0 });

        servo.servo_write(13, 120).unwrap();
        // 500 + 120 * 2000 / 180 = 1833
        assert_eq!(servo.into_inner().duty, 1833);
    }
}
