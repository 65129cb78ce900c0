//! Floor numbering and travel direction
//!
//! Floors are 1-indexed. A [`Floor`] can only be built for a number inside
//! the configured floor count, so out-of-range requests are rejected where
//! they enter the system and never reach the tracker.

use core::fmt;

/// Upper bound on configurable floors
pub const MAX_FLOORS: u8 = 8;

/// A validated floor number (1-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Floor(u8);

/// Direction of cabin travel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Up,
    Down,
}

impl Floor {
    /// Power-on floor
    pub const GROUND: Floor = Floor(1);

    /// Create a floor if `number` lies in `1..=floor_count`
    pub fn new(number: u8, floor_count: u8) -> Option<Self> {
        if number >= 1 && number <= floor_count.min(MAX_FLOORS) {
            Some(Self(number))
        } else {
            None
        }
    }

    /// Create a floor from a 0-based button index
    pub fn from_index(index: usize, floor_count: u8) -> Option<Self> {
        let number = u8::try_from(index).ok()?.checked_add(1)?;
        Self::new(number, floor_count)
    }

    /// Floor number as shown to users and sent on the bus
    pub const fn number(self) -> u8 {
        self.0
    }

    /// 0-based index (button slot)
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// Direction needed to travel from `self` to `target`
    ///
    /// Returns `None` when both are the same floor.
    pub fn direction_to(self, target: Floor) -> Option<Direction> {
        if target.0 > self.0 {
            Some(Direction::Up)
        } else if target.0 < self.0 {
            Some(Direction::Down)
        } else {
            None
        }
    }

    /// Adjacent floor in `direction`, if it exists
    pub fn step(self, direction: Direction, floor_count: u8) -> Option<Floor> {
        match direction {
            Direction::Up => Floor::new(self.0.checked_add(1)?, floor_count),
            Direction::Down => Floor::new(self.0.checked_sub(1)?, floor_count),
        }
    }

    /// Iterate all floors `1..=floor_count` in ascending order
    pub fn all(floor_count: u8) -> impl Iterator<Item = Floor> {
        (1..=floor_count.min(MAX_FLOORS)).map(Floor)
    }
}

impl Default for Floor {
    fn default() -> Self {
        Self::GROUND
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
