//! Machine configuration
//!
//! `MACHINE_CONFIG` is generated by build.rs from machine.toml, which has
//! already been validated by the time this compiles.

use dumbwaiter_core::config::{ActiveLevel, BusConfig, CabinConfig, InputConfig, MachineConfig};

include!(concat!(env!("OUT_DIR"), "/machine_config.rs"));
