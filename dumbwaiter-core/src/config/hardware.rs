//! Hardware configuration types
//!
//! Input polarity for the cabin's switches and the top-level machine
//! configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::types::{BusConfig, CabinConfig, ConfigError};

/// Supported configuration version
pub const CONFIG_VERSION: u8 = 1;

/// Electrical level at which an input is considered active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ActiveLevel {
    High,
    /// Switch to ground with a pull-up (the usual wiring)
    #[default]
    Low,
}

impl ActiveLevel {
    /// Translate a raw pin level into the logical "active" state
    pub fn is_active(self, pin_high: bool) -> bool {
        match self {
            ActiveLevel::High => pin_high,
            ActiveLevel::Low => !pin_high,
        }
    }
}

/// Input polarity configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct InputConfig {
    /// Level reported by the door-lock contact when the door is open
    pub door_open: ActiveLevel,
    /// Level reported by the proximity sensor when a magnet is present
    pub magnet: ActiveLevel,
    /// Level reported by a pressed call button
    pub buttons: ActiveLevel,
}

impl Default for InputConfig {
    fn default() -> Self {
        // Pulled-up contacts: the lock switch opens (pin floats high) with the door
        Self {
            door_open: ActiveLevel::High,
            magnet: ActiveLevel::Low,
            buttons: ActiveLevel::Low,
        }
    }
}

/// Complete machine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct MachineConfig {
    /// Configuration version for compatibility checks
    pub version: u8,
    pub cabin: CabinConfig,
    pub inputs: InputConfig,
    pub bus: BusConfig,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            cabin: CabinConfig::default(),
            inputs: InputConfig::default(),
            bus: BusConfig::default(),
        }
    }
}

impl MachineConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate all sections
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version != CONFIG_VERSION {
            return Err(ConfigError::VersionMismatch);
        }
        self.cabin.validate()?;
        self.bus.validate()
    }
}
