//! Board-agnostic motion-control core for the dumbwaiter controller
//!
//! This crate contains all cabin logic that does not depend on specific
//! hardware implementations:
//!
//! - Floor numbering and travel direction
//! - Floor tracker state machine and request arbitration
//! - Two-pulse position sensor debouncing
//! - Door-lock safety interlock
//! - Motor output selection
//! - Collaborator traits (sensors, call buttons, motor, status bus, indicator)
//! - Configuration type definitions

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod control;
pub mod floor;
pub mod motion;
pub mod safety;
pub mod sensor;
pub mod state;
pub mod traits;

pub use floor::{Direction, Floor, MAX_FLOORS};
