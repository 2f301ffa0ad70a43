//! Event sink trait and stock sinks

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::Sender;

use super::event::SensorEvent;

/// Anything a driver can emit events into
///
/// Emission must not block: a sink that cannot accept an event drops it.
pub trait EventSink {
    /// Deliver one event
    fn emit(&mut self, event: SensorEvent);
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn emit(&mut self, event: SensorEvent) {
        (**self).emit(event)
    }
}

/// Discards every event
impl EventSink for () {
    fn emit(&mut self, _event: SensorEvent) {}
}

/// Records events in order until full
impl<const N: usize> EventSink for heapless::Vec<SensorEvent, N> {
    fn emit(&mut self, event: SensorEvent) {
        if self.push(event).is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("event buffer full, dropped {}", event);
        }
    }
}

/// Forwards events to an embassy channel without waiting
impl<M: RawMutex, const N: usize> EventSink for Sender<'_, M, SensorEvent, N> {
    fn emit(&mut self, event: SensorEvent) {
        if self.try_send(event).is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("event channel full, dropped {}", event);
        }
    }
}

/// Listener closure wrapped as a sink
pub struct FnSink<F>(pub F);

impl<F: FnMut(SensorEvent)> EventSink for FnSink<F> {
    fn emit(&mut self, event: SensorEvent) {
        (self.0)(event)
    }
}
