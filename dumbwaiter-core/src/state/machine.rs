//! State machine definition

use super::events::Event;
use crate::floor::{Direction, Floor};

/// A trip toward a destination floor
///
/// Fixed for the duration of the move: there is no destination override
/// mid-flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Trip {
    pub destination: Floor,
    pub direction: Direction,
}

impl Trip {
    /// Plan a trip from `from` to `to`
    ///
    /// Returns `None` when the cabin is already there.
    pub fn plan(from: Floor, to: Floor) -> Option<Self> {
        from.direction_to(to).map(|direction| Self {
            destination: to,
            direction,
        })
    }
}

/// Cabin states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Stopped at a floor, accepting calls
    #[default]
    Idle,
    /// Travelling toward the trip destination
    Moving(Trip),
}

impl State {
    /// Check if the cabin is travelling
    pub fn is_moving(&self) -> bool {
        matches!(self, State::Moving(_))
    }

    /// Active trip, if any
    pub fn trip(&self) -> Option<Trip> {
        match self {
            State::Moving(trip) => Some(*trip),
            State::Idle => None,
        }
    }

    /// Process an event and return the next state
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use State::*;

        match (self, event) {
            (Idle, Requested(trip)) => Moving(trip),

            (Moving(trip), Crossed(floor)) if floor == trip.destination => Idle,
            (Moving(trip), Crossed(_)) => Moving(trip),
            (Moving(_), DoorOpened) => Idle,

            // Requests while moving are ignored; nothing else moves an idle cabin
            _ => self,
        }
    }
}
