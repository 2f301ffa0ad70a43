//! Analog input abstractions
//!
//! Provides the read primitive used by analog sensor drivers.

/// Analog input connection
///
/// The connection decides when the conversion completes: an implementation
/// may finish immediately, wait on an ADC-ready interrupt, or round-trip to
/// a remote board. Callers only see a single-shot future.
pub trait AnalogRead {
    /// Error type for read operations
    type Error;

    /// Read the current value of an analog pin
    ///
    /// # Arguments
    /// * `pin` - Pin number on this connection
    ///
    /// The value is passed through unscaled. Its range depends on the
    /// converter (0-4095 for a 12-bit ADC) or on whatever the connection
    /// reports.
    fn analog_read(
        &mut self,
        pin: u8,
    ) -> impl core::future::Future<Output = Result<i32, Self::Error>>;
}

impl<T: AnalogRead + ?Sized> AnalogRead for &mut T {
    type Error = T::Error;

    async fn analog_read(&mut self, pin: u8) -> Result<i32, Self::Error> {
        (**self).analog_read(pin).await
    }
}
