//! Cabin indicator
//!
//! One-directional notifications for a local display or indicator lamps.

use crate::floor::{Direction, Floor};

/// What the cabin indication should show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IndicatorEvent {
    /// Stopped at `floor`, door closed
    Idle(Floor),
    /// Travelling, last passed `floor`
    Moving { direction: Direction, floor: Floor },
    /// Door open, cabin held
    DoorBlocked,
}

/// Receives indication changes
pub trait Indicator {
    /// Called only when the indication changes
    fn notify(&mut self, event: IndicatorEvent);
}
