//! Motion control
//!
//! Selects the motor output for a cycle. The two directional outputs are
//! driven from a single [`MotorCommand`], so asserting both is impossible.

pub mod controller;

pub use controller::{motor_command, MotorCommand, MotorLevels};
