//! Door-lock interlock
//!
//! Level-triggered: only the latest sample matters. There is no latching and
//! no memory of an interrupted trip; once the door closes the cabin stays
//! idle until a new request arrives.

/// Interlock condition for one control cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterlockState {
    /// Door closed and locked, motion permitted
    #[default]
    Released,
    /// Door open, motion forbidden
    Engaged,
}

impl InterlockState {
    /// Derive the interlock condition from the door-lock reading
    pub fn from_door_open(door_open: bool) -> Self {
        if door_open {
            InterlockState::Engaged
        } else {
            InterlockState::Released
        }
    }

    /// Check if motion must be suppressed
    pub fn is_engaged(self) -> bool {
        self == InterlockState::Engaged
    }
}

/// Interlock holding the latest door-lock sample
#[derive(Debug, Clone, Default)]
pub struct Interlock {
    latest: InterlockState,
}

impl Interlock {
    /// Create an interlock in the released state
    pub fn new() -> Self {
        Self::default()
    }

    /// Record this cycle's door-lock reading
    pub fn sample(&mut self, door_open: bool) -> InterlockState {
        self.latest = InterlockState::from_door_open(door_open);
        self.latest
    }

    /// Condition from the most recent sample
    pub fn state(&self) -> InterlockState {
        self.latest
    }

    /// Check if the last sample forbids motion
    pub fn is_engaged(&self) -> bool {
        self.latest.is_engaged()
    }
}
