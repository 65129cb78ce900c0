//! Events that trigger state transitions

use super::machine::Trip;
use crate::floor::Floor;

/// Events raised during a control cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// A call was accepted while idle
    Requested(Trip),
    /// A floor boundary was crossed; carries the new current floor
    Crossed(Floor),
    /// The door opened while the cabin was moving
    DoorOpened,
}

impl Event {
    /// Check if this event forces a stop regardless of position
    pub fn is_safety_event(&self) -> bool {
        matches!(self, Event::DoorOpened)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safety_events() {
        assert!(Event::DoorOpened.is_safety_event());
        assert!(!Event::Crossed(Floor::GROUND).is_safety_event());
    }
}
