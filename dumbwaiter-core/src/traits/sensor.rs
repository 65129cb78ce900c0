//! Cabin sensor traits
//!
//! Implementations resolve active levels and read failures themselves. A
//! door contact that cannot be read must report the door open.

/// Door-lock contact
pub trait InterlockSensor {
    /// Check if the door is open (or its state is unknown)
    fn is_door_open(&mut self) -> bool;
}

/// Magnet proximity sensor on the cabin
pub trait PositionSensor {
    /// Check if a magnet is in front of the sensor
    fn is_magnet_present(&mut self) -> bool;
}
