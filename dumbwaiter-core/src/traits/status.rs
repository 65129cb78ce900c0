//! Floor status reporting

use crate::floor::Floor;

/// Errors from the status transport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StatusError {
    /// Outgoing queue is full
    QueueFull,
    /// Transport failed to send
    Transport,
}

/// Publishes the current floor to the rest of the building
///
/// Fire-and-forget: a failure is reported to the caller for logging but
/// never alters cabin state.
pub trait StatusReporter {
    /// Send the cabin's current floor
    fn send_floor_status(&mut self, floor: Floor) -> Result<(), StatusError>;
}
