//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in dumbwaiter-core on top of `embedded-hal` digital pins:
//!
//! - Door-lock contact and magnet proximity sensor
//! - Call button panel
//! - Two-output hoist motor with break-before-make switching

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod input;
pub mod motor;

pub use input::{ActiveInput, ButtonPanel, DoorLock, MagnetSensor};
pub use motor::TwoWireMotor;
