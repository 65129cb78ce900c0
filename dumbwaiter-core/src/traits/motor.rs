//! Motor driver trait
//!
//! The hoist motor has two direction outputs. Drivers must never assert
//! both, and must switch break-before-make when reversing.

use crate::floor::Direction;
use crate::motion::MotorCommand;

/// Errors that can occur with motor operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotorError {
    /// An output pin could not be driven
    Output,
}

/// Two-output hoist motor
pub trait MotorDriver {
    /// Drive the outputs to match `command`
    ///
    /// On error the driver has attempted to deassert both outputs.
    fn apply(&mut self, command: MotorCommand) -> Result<(), MotorError>;

    /// Drive toward `direction`
    fn drive(&mut self, direction: Direction) -> Result<(), MotorError> {
        self.apply(MotorCommand::Drive(direction))
    }

    /// Deassert both outputs
    fn halt(&mut self) -> Result<(), MotorError> {
        self.apply(MotorCommand::Halt)
    }
}
