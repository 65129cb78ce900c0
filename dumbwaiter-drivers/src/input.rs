//! Digital cabin inputs
//!
//! Each input resolves its configured active level and maps read failures
//! to the safe reading for that signal:
//!
//! | input      | read error means |
//! |------------|------------------|
//! | door lock  | door open        |
//! | magnet     | no magnet        |
//! | button     | not pressed      |

use dumbwaiter_core::config::ActiveLevel;
use dumbwaiter_core::traits::{InterlockSensor, PositionSensor, RequestIntake};
use dumbwaiter_core::{Floor, MAX_FLOORS};
use embedded_hal::digital::InputPin;
use heapless::Vec;

/// An input pin with a configured active level
pub struct ActiveInput<P> {
    pin: P,
    active: ActiveLevel,
}

impl<P: InputPin> ActiveInput<P> {
    pub fn new(pin: P, active: ActiveLevel) -> Self {
        Self { pin, active }
    }

    /// Check if the input is at its active level
    pub fn read(&mut self) -> Result<bool, P::Error> {
        let active = self.active;
        self.pin.is_high().map(|high| active.is_active(high))
    }
}

/// Door-lock contact
pub struct DoorLock<P> {
    input: ActiveInput<P>,
}

impl<P: InputPin> DoorLock<P> {
    /// `open` is the level the contact reports with the door open
    pub fn new(pin: P, open: ActiveLevel) -> Self {
        Self {
            input: ActiveInput::new(pin, open),
        }
    }
}

impl<P: InputPin> InterlockSensor for DoorLock<P> {
    fn is_door_open(&mut self) -> bool {
        self.input.read().unwrap_or(true)
    }
}

/// Magnet proximity sensor
pub struct MagnetSensor<P> {
    input: ActiveInput<P>,
}

impl<P: InputPin> MagnetSensor<P> {
    pub fn new(pin: P, active: ActiveLevel) -> Self {
        Self {
            input: ActiveInput::new(pin, active),
        }
    }
}

impl<P: InputPin> PositionSensor for MagnetSensor<P> {
    fn is_magnet_present(&mut self) -> bool {
        self.input.read().unwrap_or(false)
    }
}

/// One call button per floor, ground floor first
pub struct ButtonPanel<P> {
    buttons: Vec<ActiveInput<P>, { MAX_FLOORS as usize }>,
}

impl<P: InputPin> ButtonPanel<P> {
    /// Build a panel from pins in floor order
    ///
    /// Pins beyond the eighth floor are dropped.
    pub fn new(pins: impl IntoIterator<Item = P>, active: ActiveLevel) -> Self {
        let buttons = pins
            .into_iter()
            .take(MAX_FLOORS as usize)
            .map(|pin| ActiveInput::new(pin, active))
            .collect();
        Self { buttons }
    }

    /// Number of wired buttons
    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }
}

impl<P: InputPin> RequestIntake for ButtonPanel<P> {
    fn is_button_pressed(&mut self, floor: Floor) -> bool {
        self.buttons
            .get_mut(floor.index())
            .is_some_and(|button| button.read().unwrap_or(false))
    }
}
