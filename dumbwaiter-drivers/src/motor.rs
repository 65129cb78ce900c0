//! Two-output hoist motor
//!
//! The motor contactor (or H-bridge) has one input per direction. Asserting
//! both shorts the supply, so every change releases outputs before it
//! asserts any:
//!
//! ```text
//! up    ‾‾‾‾‾‾|________________
//! down  ______________|‾‾‾‾‾‾‾‾
//!             ^ release ^ assert
//! ```

use dumbwaiter_core::motion::{MotorCommand, MotorLevels};
use dumbwaiter_core::traits::{MotorDriver, MotorError};
use embedded_hal::digital::OutputPin;

/// Active-high up/down motor outputs
pub struct TwoWireMotor<U, D> {
    up: U,
    down: D,
    command: MotorCommand,
}

impl<U: OutputPin, D: OutputPin> TwoWireMotor<U, D> {
    /// Take both outputs and drive them low
    pub fn new(up: U, down: D) -> Result<Self, MotorError> {
        let mut motor = Self {
            up,
            down,
            command: MotorCommand::Halt,
        };
        motor.release_all()?;
        Ok(motor)
    }

    /// Last command successfully applied
    pub fn command(&self) -> MotorCommand {
        self.command
    }

    fn write(&mut self, levels: MotorLevels) -> Result<(), MotorError> {
        if !levels.up {
            self.up.set_low().map_err(|_| MotorError::Output)?;
        }
        if !levels.down {
            self.down.set_low().map_err(|_| MotorError::Output)?;
        }
        if levels.up {
            self.up.set_high().map_err(|_| MotorError::Output)?;
        }
        if levels.down {
            self.down.set_high().map_err(|_| MotorError::Output)?;
        }
        Ok(())
    }

    /// Drive both outputs low, trying both even if one fails
    fn release_all(&mut self) -> Result<(), MotorError> {
        let up = self.up.set_low();
        let down = self.down.set_low();
        match (up, down) {
            (Ok(()), Ok(())) => Ok(()),
            _ => Err(MotorError::Output),
        }
    }
}

impl<U: OutputPin, D: OutputPin> MotorDriver for TwoWireMotor<U, D> {
    fn apply(&mut self, command: MotorCommand) -> Result<(), MotorError> {
        match self.write(command.levels()) {
            Ok(()) => {
                self.command = command;
                Ok(())
            }
            Err(err) => {
                self.command = MotorCommand::Halt;
                // Best effort, the write error is what gets reported
                let _ = self.release_all();
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dumbwaiter_core::Direction;
    use embedded_hal::digital::{ErrorKind, ErrorType};
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Shared view of both outputs
    #[derive(Default)]
    struct Wiring {
        up: bool,
        down: bool,
        overlapped: bool,
        fail_up_high: bool,
    }

    #[derive(Clone, Copy)]
    enum Side {
        Up,
        Down,
    }

    struct MockOutput {
        side: Side,
        wiring: Rc<RefCell<Wiring>>,
    }

    impl ErrorType for MockOutput {
        type Error = ErrorKind;
    }

    impl OutputPin for MockOutput {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            let mut wiring = self.wiring.borrow_mut();
            match self.side {
                Side::Up => wiring.up = false,
                Side::Down => wiring.down = false,
            }
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            let mut wiring = self.wiring.borrow_mut();
            match self.side {
                Side::Up if wiring.fail_up_high => return Err(ErrorKind::Other),
                Side::Up => wiring.up = true,
                Side::Down => wiring.down = true,
            }
            if wiring.up && wiring.down {
                wiring.overlapped = true;
            }
            Ok(())
        }
    }

    fn motor() -> (TwoWireMotor<MockOutput, MockOutput>, Rc<RefCell<Wiring>>) {
        let wiring = Rc::new(RefCell::new(Wiring {
            up: true,
            down: true,
            ..Default::default()
        }));
        let up = MockOutput {
            side: Side::Up,
            wiring: wiring.clone(),
        };
        let down = MockOutput {
            side: Side::Down,
            wiring: wiring.clone(),
        };
        (TwoWireMotor::new(up, down).unwrap(), wiring)
    }

    #[test]
    fn test_starts_released() {
        let (motor, wiring) = motor();
        let wiring = wiring.borrow();
        assert!(!wiring.up && !wiring.down);
        assert_eq!(motor.command(), MotorCommand::Halt);
    }

    #[test]
    fn test_drive_and_halt() {
        let (mut motor, wiring) = motor();
        motor.drive(Direction::Up).unwrap();
        assert!(wiring.borrow().up);
        assert!(!wiring.borrow().down);

        motor.halt().unwrap();
        assert!(!wiring.borrow().up);
        assert!(!wiring.borrow().down);
    }

    #[test]
    fn test_reversal_is_break_before_make() {
        let (mut motor, wiring) = motor();
        for _ in 0..3 {
            motor.drive(Direction::Up).unwrap();
            motor.drive(Direction::Down).unwrap();
        }
        assert!(!wiring.borrow().up);
        assert!(wiring.borrow().down);
        assert!(!wiring.borrow().overlapped);
        assert_eq!(motor.command(), MotorCommand::Drive(Direction::Down));
    }

    #[test]
    fn test_output_error_releases_both() {
        let (mut motor, wiring) = motor();
        motor.drive(Direction::Down).unwrap();
        wiring.borrow_mut().fail_up_high = true;

        assert_eq!(motor.drive(Direction::Up), Err(MotorError::Output));
        assert!(!wiring.borrow().up);
        assert!(!wiring.borrow().down);
        assert_eq!(motor.command(), MotorCommand::Halt);
    }
}
