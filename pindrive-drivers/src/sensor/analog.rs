//! Analog sensor driver with threshold events
//!
//! Each poll reads the pin once, stores the value and reports it to the
//! owning device. Readings strictly outside `[lower_limit, upper_limit]`
//! additionally raise a `lowerLimit` or `upperLimit` event. Limits never
//! alter the stored value.
//!
//! # Usage
//!
//! ```ignore
//! static EVENTS: Channel<CriticalSectionRawMutex, SensorEvent, 8> = Channel::new();
//!
//! let config = AnalogSensorConfig::new("light", 26)?;
//! let mut sensor = AnalogSensor::new(adc, EVENTS.sender(), &config);
//!
//! let value = sensor.start().await?;  // emits analogRead (+ limit events)
//! ```

use embedded_hal_async::delay::DelayNs;
use heapless::String;

use pindrive_core::config::{AnalogSensorConfig, SensorLimits, MAX_NAME_LEN};
use pindrive_core::events::{EventSink, SensorEvent};
use pindrive_core::traits::Driver;
use pindrive_hal::AnalogRead;

/// Commands an analog sensor exposes
///
/// `analogRead` is served by [`AnalogSensor::start`] and named after the
/// event it produces; `currentValue` by [`AnalogSensor::current_value`].
pub const ANALOG_SENSOR_COMMANDS: &[&str] = &["analogRead", "currentValue"];

/// Errors that can occur with analog sensor operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError<E> {
    /// The connection failed to produce a reading
    Read(E),
}

/// Analog sensor driver
///
/// Owns its connection and the sink standing in for the owning device.
/// `start` takes `&mut self`, so a second poll cannot begin while one is
/// still awaiting its reading.
pub struct AnalogSensor<C, E> {
    connection: C,
    events: E,
    name: String<MAX_NAME_LEN>,
    pin: u8,
    /// Last reading, `None` until the first read completes
    analog_val: Option<i32>,
    limits: SensorLimits,
}

impl<C: AnalogRead, E: EventSink> AnalogSensor<C, E> {
    /// Create a new analog sensor driver
    ///
    /// Limits default to 0 (lower) and 256 (upper) unless configured.
    pub fn new(connection: C, events: E, config: &AnalogSensorConfig) -> Self {
        Self {
            connection,
            events,
            name: config.name.clone(),
            pin: config.device.pin,
            analog_val: None,
            limits: config.params.resolved_limits(),
        }
    }

    /// Poll the sensor once
    ///
    /// Awaits the connection's reading, then, before returning:
    /// 1. stores it,
    /// 2. emits `analogRead`,
    /// 3. emits `lowerLimit` if it is below the lower limit,
    /// 4. emits `upperLimit` if it is above the upper limit.
    ///
    /// On a read error nothing is stored or emitted.
    pub async fn start(&mut self) -> Result<i32, SensorError<C::Error>> {
        let value = match self.connection.analog_read(self.pin).await {
            Ok(value) => value,
            Err(e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("sensor {}: read on pin {} failed", self.name.as_str(), self.pin);
                return Err(SensorError::Read(e));
            }
        };

        self.record(value);
        Ok(value)
    }

    /// Poll forever, waiting `period_ms` between reads
    ///
    /// Only returns when a read fails.
    pub async fn run<D: DelayNs>(
        &mut self,
        delay: &mut D,
        period_ms: u32,
    ) -> SensorError<C::Error> {
        loop {
            if let Err(e) = self.start().await {
                return e;
            }
            delay.delay_ms(period_ms).await;
        }
    }

    fn record(&mut self, value: i32) {
        #[cfg(feature = "defmt")]
        defmt::trace!("sensor {}: pin {} read {}", self.name.as_str(), self.pin, value);

        self.analog_val = Some(value);
        self.emit(SensorEvent::AnalogRead(value));

        if self.limits.is_below(value) {
            self.emit(SensorEvent::LowerLimit(value));
        }
        if self.limits.is_above(value) {
            self.emit(SensorEvent::UpperLimit(value));
        }
    }

    fn emit(&mut self, event: SensorEvent) {
        #[cfg(feature = "defmt")]
        {
            if event.is_threshold() {
                defmt::debug!(
                    "sensor {}: {} crossed {}",
                    self.name.as_str(),
                    event.value(),
                    event.name()
                );
            }
        }

        self.events.emit(event);
    }
}

impl<C, E> AnalogSensor<C, E> {
    /// Get the last reading
    pub fn current_value(&self) -> Option<i32> {
        self.analog_val
    }

    /// Get the upper limit
    pub fn upper_limit(&self) -> i32 {
        self.limits.upper
    }

    /// Get the lower limit
    pub fn lower_limit(&self) -> i32 {
        self.limits.lower
    }

    /// Get both limits
    pub fn limits(&self) -> SensorLimits {
        self.limits
    }

    /// Get access to the event sink
    pub fn events(&self) -> &E {
        &self.events
    }

    /// Get access to the underlying connection
    pub fn connection(&self) -> &C {
        &self.connection
    }

    /// Release the connection and the event sink
    pub fn release(self) -> (C, E) {
        (self.connection, self.events)
    }
}

impl<C, E> Driver for AnalogSensor<C, E> {
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn pin(&self) -> u8 {
        self.pin
    }

    fn commands(&self) -> &'static [&'static str] {
        ANALOG_SENSOR_COMMANDS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_futures::block_on;
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;
    use embassy_sync::channel::Channel;
    use pindrive_core::config::AnalogSensorParams;

    type Events = heapless::Vec<SensorEvent, 16>;

    // Mock connection replaying a fixed list of readings, then failing
    struct MockAdc {
        readings: &'static [i32],
        next: usize,
        pins: heapless::Vec<u8, 16>,
    }

    impl MockAdc {
        fn new(readings: &'static [i32]) -> Self {
            Self {
                readings,
                next: 0,
                pins: heapless::Vec::new(),
            }
        }
    }

    impl AnalogRead for MockAdc {
        type Error = ();

        async fn analog_read(&mut self, pin: u8) -> Result<i32, ()> {
            let _ = self.pins.push(pin);
            let value = self.readings.get(self.next).copied().ok_or(())?;
            self.next += 1;
            Ok(value)
        }
    }

    // Mock delay counting requested waits
    #[derive(Default)]
    struct MockDelay {
        waits_ms: heapless::Vec<u32, 16>,
    }

    impl DelayNs for MockDelay {
        async fn delay_ns(&mut self, _ns: u32) {}

        async fn delay_ms(&mut self, ms: u32) {
            let _ = self.waits_ms.push(ms);
        }
    }

    fn sensor(readings: &'static [i32]) -> AnalogSensor<MockAdc, Events> {
        let config = AnalogSensorConfig::new("sensor", 13).unwrap();
        AnalogSensor::new(MockAdc::new(readings), Events::new(), &config)
    }

    #[test]
    fn test_constructor_defaults() {
        let sensor = sensor(&[]);
        assert_eq!(sensor.pin(), 13);
        assert_eq!(sensor.upper_limit(), 256);
        assert_eq!(sensor.lower_limit(), 0);
        assert_eq!(sensor.current_value(), None);
    }

    #[test]
    fn test_constructor_limits() {
        let config = AnalogSensorConfig::new("sensor", 13)
            .unwrap()
            .with_params(AnalogSensorParams::with_limits(50, 180));
        let sensor = AnalogSensor::new(MockAdc::new(&[]), (), &config);

        assert_eq!(sensor.pin(), 13);
        assert_eq!(sensor.upper_limit(), 180);
        assert_eq!(sensor.lower_limit(), 50);
    }

    #[test]
    fn test_start_with_configured_limits() {
        let config = AnalogSensorConfig::new("sensor", 13)
            .unwrap()
            .with_params(AnalogSensorParams::with_limits(50, 180));
        let connection = MockAdc::new(&[50, 180, 49, 181]);
        let mut sensor = AnalogSensor::new(connection, Events::new(), &config);

        for _ in 0..4 {
            block_on(sensor.start()).unwrap();
        }

        let seen: heapless::Vec<(&str, i32), 8> = sensor
            .events()
            .iter()
            .map(|e| (e.name(), e.value()))
            .collect();
        assert_eq!(
            seen.as_slice(),
            &[
                ("analogRead", 50),
                ("analogRead", 180),
                ("analogRead", 49),
                ("lowerLimit", 49),
                ("analogRead", 181),
                ("upperLimit", 181),
            ]
        );
        assert_eq!(sensor.current_value(), Some(181));
    }

    #[test]
    fn test_commands_are_strings() {
        let sensor = sensor(&[]);
        assert!(!sensor.commands().is_empty());
        assert!(sensor.has_command("analogRead"));
    }

    #[test]
    fn test_start_within_limits() {
        let mut sensor = sensor(&[75]);

        assert_eq!(block_on(sensor.start()), Ok(75));

        assert_eq!(sensor.connection().pins.as_slice(), &[13]);
        assert_eq!(sensor.current_value(), Some(75));
        assert_eq!(sensor.events().as_slice(), &[SensorEvent::AnalogRead(75)]);
    }

    #[test]
    fn test_start_below_lower_limit() {
        let mut sensor = sensor(&[-1]);

        block_on(sensor.start()).unwrap();

        assert_eq!(sensor.current_value(), Some(-1));
        assert_eq!(
            sensor.events().as_slice(),
            &[SensorEvent::AnalogRead(-1), SensorEvent::LowerLimit(-1)]
        );
    }

    #[test]
    fn test_start_above_upper_limit() {
        let mut sensor = sensor(&[360]);

        block_on(sensor.start()).unwrap();

        // Out-of-range readings are stored as-is
        assert_eq!(sensor.current_value(), Some(360));
        assert_eq!(
            sensor.events().as_slice(),
            &[SensorEvent::AnalogRead(360), SensorEvent::UpperLimit(360)]
        );
    }

    #[test]
    fn test_limit_boundaries_emit_only_read() {
        let mut sensor = sensor(&[0, 256]);

        block_on(sensor.start()).unwrap();
        block_on(sensor.start()).unwrap();

        assert_eq!(
            sensor.events().as_slice(),
            &[SensorEvent::AnalogRead(0), SensorEvent::AnalogRead(256)]
        );
    }

    #[test]
    fn test_polls_are_independent() {
        let mut sensor = sensor(&[75, -1, 360]);

        for _ in 0..3 {
            block_on(sensor.start()).unwrap();
        }

        assert_eq!(sensor.current_value(), Some(360));
        let names: heapless::Vec<&str, 8> = sensor.events().iter().map(|e| e.name()).collect();
        assert_eq!(
            names.as_slice(),
            &["analogRead", "analogRead", "lowerLimit", "analogRead", "upperLimit"]
        );
    }

    #[test]
    fn test_failed_read_emits_nothing() {
        let mut sensor = sensor(&[75]);
        block_on(sensor.start()).unwrap();

        assert_eq!(block_on(sensor.start()), Err(SensorError::Read(())));

        assert_eq!(sensor.current_value(), Some(75));
        assert_eq!(sensor.events().len(), 1);
    }

    #[test]
    fn test_events_through_channel() {
        let channel: Channel<NoopRawMutex, SensorEvent, 4> = Channel::new();
        let config = AnalogSensorConfig::new("sensor", 13).unwrap();
        let mut sensor = AnalogSensor::new(MockAdc::new(&[-1]), channel.sender(), &config);

        block_on(sensor.start()).unwrap();

        assert_eq!(channel.try_receive().ok(), Some(SensorEvent::AnalogRead(-1)));
        assert_eq!(channel.try_receive().ok(), Some(SensorEvent::LowerLimit(-1)));
        assert!(channel.try_receive().is_err());
    }

    #[test]
    fn test_run_polls_until_read_fails() {
        let mut sensor = sensor(&[10, 20, 300]);
        let mut delay = MockDelay::default();

        let error = block_on(sensor.run(&mut delay, 100));

        assert_eq!(error, SensorError::Read(()));
        assert_eq!(delay.waits_ms.as_slice(), &[100, 100, 100]);
        assert_eq!(sensor.current_value(), Some(300));
        assert_eq!(sensor.events().last(), Some(&SensorEvent::UpperLimit(300)));
    }
}
