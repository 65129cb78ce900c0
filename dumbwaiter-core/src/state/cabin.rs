//! Cabin state
//!
//! The single mutable record of where the cabin is and what it is doing.
//! Owned by the [`FloorTracker`](super::FloorTracker); read-only to
//! everything else.

use super::machine::State;
use crate::floor::{Direction, Floor};
use crate::sensor::PositionDebouncer;

/// Cabin position, motion and debounce latch
#[derive(Debug, Clone)]
pub struct CabinState {
    pub(crate) current: Floor,
    pub(crate) state: State,
    pub(crate) sensor: PositionDebouncer,
}

impl CabinState {
    /// Power-on state: ground floor, idle, disarmed
    pub fn new(guard_delay_ms: u32) -> Self {
        Self {
            current: Floor::GROUND,
            state: State::Idle,
            sensor: PositionDebouncer::new(guard_delay_ms),
        }
    }

    /// Floor the cabin is at (or last passed)
    pub fn current_floor(&self) -> Floor {
        self.current
    }

    /// Destination of the active trip
    pub fn destination_floor(&self) -> Option<Floor> {
        self.state.trip().map(|trip| trip.destination)
    }

    /// Check if a trip is underway
    pub fn in_motion(&self) -> bool {
        self.state.is_moving()
    }

    /// Direction of the active trip
    pub fn direction(&self) -> Option<Direction> {
        self.state.trip().map(|trip| trip.direction)
    }

    /// First magnet edge seen, awaiting the second
    pub fn armed(&self) -> bool {
        self.sensor.is_armed()
    }

    /// State machine state
    pub fn state(&self) -> State {
        self.state
    }
}
