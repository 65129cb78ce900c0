//! Firmware-side collaborators
//!
//! Bridges the control loop's status, indicator and call intake to the
//! inter-task channels.

use defmt::*;
use embassy_rp::gpio::Input;

use dumbwaiter_core::traits::{
    Indicator, IndicatorEvent, RequestIntake, StatusError, StatusReporter,
};
use dumbwaiter_core::Floor;
use dumbwaiter_drivers::ButtonPanel;

use crate::channels::{INDICATOR, STATUS_CHANNEL};

/// Queues floor status for the bus transmitter without waiting
pub struct ChannelStatusReporter;

impl StatusReporter for ChannelStatusReporter {
    fn send_floor_status(&mut self, floor: Floor) -> Result<(), StatusError> {
        STATUS_CHANNEL
            .try_send(floor)
            .map_err(|_| StatusError::QueueFull)
    }
}

/// Logs indication changes and publishes them for a display
pub struct SignalIndicator;

impl Indicator for SignalIndicator {
    fn notify(&mut self, event: IndicatorEvent) {
        debug!("Indication: {:?}", event);
        INDICATOR.signal(event);
    }
}

/// Local call buttons merged with calls from the floor indicator units
pub struct CallPanel {
    local: ButtonPanel<Input<'static>>,
    remote: u8,
}

impl CallPanel {
    pub fn new(local: ButtonPanel<Input<'static>>) -> Self {
        Self { local, remote: 0 }
    }

    /// Replace the remote calls seen by this cycle
    pub fn latch(&mut self, remote: u8) {
        self.remote = remote;
    }
}

impl RequestIntake for CallPanel {
    fn is_button_pressed(&mut self, floor: Floor) -> bool {
        self.remote & (1 << floor.index()) != 0 || self.local.is_button_pressed(floor)
    }
}
