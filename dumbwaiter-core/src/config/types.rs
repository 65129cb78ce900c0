//! Configuration type definitions
//!
//! Cabin timing and bus settings. Hardware polarity lives in
//! [`super::hardware`].

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::floor::MAX_FLOORS;

/// Floors served by the reference installation
pub const DEFAULT_FLOOR_COUNT: u8 = 3;

/// Guard interval after every detected magnet edge (ms)
pub const DEFAULT_GUARD_DELAY_MS: u32 = 200;

/// Control loop period (ms)
pub const DEFAULT_CYCLE_INTERVAL_MS: u32 = 5;

/// Default bus baud rate
pub const DEFAULT_BAUD_RATE: u32 = 115_200;

/// Default floor status re-broadcast period (ms)
pub const DEFAULT_STATUS_REFRESH_MS: u32 = 1000;

/// Smallest installation that makes sense
pub const MIN_FLOORS: u8 = 2;

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Unsupported config version
    VersionMismatch,
    /// Floor count outside `MIN_FLOORS..=MAX_FLOORS`
    FloorCount,
    /// Guard delay must be non-zero
    GuardDelay,
    /// Cycle interval must be non-zero and shorter than the guard delay
    CycleInterval,
    /// Baud rate must be non-zero
    BaudRate,
}

/// Cabin motion configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct CabinConfig {
    /// Number of floors served (1-indexed, ground floor is 1)
    pub floor_count: u8,
    /// Minimum time between accepted magnet edges
    pub guard_delay_ms: u32,
    /// Control loop period
    pub cycle_interval_ms: u32,
}

impl Default for CabinConfig {
    fn default() -> Self {
        Self {
            floor_count: DEFAULT_FLOOR_COUNT,
            guard_delay_ms: DEFAULT_GUARD_DELAY_MS,
            cycle_interval_ms: DEFAULT_CYCLE_INTERVAL_MS,
        }
    }
}

impl CabinConfig {
    /// Check value ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_FLOORS..=MAX_FLOORS).contains(&self.floor_count) {
            return Err(ConfigError::FloorCount);
        }
        if self.guard_delay_ms == 0 {
            return Err(ConfigError::GuardDelay);
        }
        // A cycle as long as the guard would let a whole magnet pass between samples
        if self.cycle_interval_ms == 0 || self.cycle_interval_ms >= self.guard_delay_ms {
            return Err(ConfigError::CycleInterval);
        }
        Ok(())
    }
}

/// Floor indicator bus configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct BusConfig {
    /// UART baud rate
    pub baud_rate: u32,
    /// Period for re-sending the last floor status (0 = only on change)
    pub status_refresh_ms: u32,
}

impl Default for BusConfig {
    fn default() -> Self {
        Self {
            baud_rate: DEFAULT_BAUD_RATE,
            status_refresh_ms: DEFAULT_STATUS_REFRESH_MS,
        }
    }
}

impl BusConfig {
    /// Check value ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.baud_rate == 0 {
            return Err(ConfigError::BaudRate);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cabin_is_valid() {
        let cabin = CabinConfig::default();
        assert_eq!(cabin.floor_count, 3);
        assert_eq!(cabin.guard_delay_ms, 200);
        assert_eq!(cabin.validate(), Ok(()));
    }

    #[test]
    fn test_floor_count_bounds() {
        let mut cabin = CabinConfig::default();
        cabin.floor_count = 1;
        assert_eq!(cabin.validate(), Err(ConfigError::FloorCount));
        cabin.floor_count = MAX_FLOORS + 1;
        assert_eq!(cabin.validate(), Err(ConfigError::FloorCount));
        cabin.floor_count = MAX_FLOORS;
        assert_eq!(cabin.validate(), Ok(()));
    }

    #[test]
    fn test_cycle_must_be_shorter_than_guard() {
        let mut cabin = CabinConfig::default();
        cabin.cycle_interval_ms = cabin.guard_delay_ms;
        assert_eq!(cabin.validate(), Err(ConfigError::CycleInterval));
        cabin.cycle_interval_ms = 0;
        assert_eq!(cabin.validate(), Err(ConfigError::CycleInterval));
    }

    #[test]
    fn test_zero_guard_rejected() {
        let cabin = CabinConfig {
            guard_delay_ms: 0,
            ..Default::default()
        };
        assert_eq!(cabin.validate(), Err(ConfigError::GuardDelay));
    }

    #[test]
    fn test_bus_validation() {
        assert_eq!(BusConfig::default().validate(), Ok(()));
        let bus = BusConfig {
            baud_rate: 0,
            ..Default::default()
        };
        assert_eq!(bus.validate(), Err(ConfigError::BaudRate));
    }
}
