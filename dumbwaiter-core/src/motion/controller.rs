//! Motor output selection

use crate::floor::{Direction, Floor};
use crate::safety::InterlockState;

/// Commanded motor output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotorCommand {
    /// Both outputs deasserted
    #[default]
    Halt,
    /// Exactly one output asserted
    Drive(Direction),
}

/// Electrical levels for the up/down outputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotorLevels {
    pub up: bool,
    pub down: bool,
}

impl MotorCommand {
    /// Output levels for this command
    pub fn levels(self) -> MotorLevels {
        match self {
            MotorCommand::Halt => MotorLevels {
                up: false,
                down: false,
            },
            MotorCommand::Drive(Direction::Up) => MotorLevels {
                up: true,
                down: false,
            },
            MotorCommand::Drive(Direction::Down) => MotorLevels {
                up: false,
                down: true,
            },
        }
    }
}

/// Motor output for the given target, position and interlock
///
/// Halts when interlocked, when there is no target, or when the cabin is
/// already at the target.
pub fn motor_command(
    target: Option<Floor>,
    current: Floor,
    interlock: InterlockState,
) -> MotorCommand {
    if interlock.is_engaged() {
        return MotorCommand::Halt;
    }

    match target.and_then(|t| current.direction_to(t)) {
        Some(direction) => MotorCommand::Drive(direction),
        None => MotorCommand::Halt,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor(n: u8) -> Floor {
        Floor::new(n, 3).unwrap()
    }

    #[test]
    fn test_levels_never_both_asserted() {
        for cmd in [
            MotorCommand::Halt,
            MotorCommand::Drive(Direction::Up),
            MotorCommand::Drive(Direction::Down),
        ] {
            let levels = cmd.levels();
            assert!(!(levels.up && levels.down));
        }
    }

    #[test]
    fn test_direction_from_target() {
        let released = InterlockState::Released;
        assert_eq!(
            motor_command(Some(floor(3)), floor(1), released),
            MotorCommand::Drive(Direction::Up)
        );
        assert_eq!(
            motor_command(Some(floor(1)), floor(2), released),
            MotorCommand::Drive(Direction::Down)
        );
    }

    #[test]
    fn test_halt_conditions() {
        let released = InterlockState::Released;
        assert_eq!(motor_command(None, floor(2), released), MotorCommand::Halt);
        assert_eq!(
            motor_command(Some(floor(2)), floor(2), released),
            MotorCommand::Halt
        );
        assert_eq!(
            motor_command(Some(floor(3)), floor(1), InterlockState::Engaged),
            MotorCommand::Halt
        );
    }

    #[test]
    fn test_halt_levels() {
        let levels = MotorCommand::Halt.levels();
        assert!(!levels.up);
        assert!(!levels.down);
    }
}
