//! Control loop
//!
//! Binds the [`FloorTracker`] to its collaborators. One [`ControlLoop::poll`]
//! is one control cycle: sample inputs, run the tracker, then drive the
//! motor, report status and update the indicator.

use crate::config::CabinConfig;
use crate::state::{CycleInputs, CycleOutcome, FloorTracker};
use crate::traits::{
    Indicator, IndicatorEvent, InterlockSensor, MotorDriver, MotorError, PositionSensor,
    RequestIntake, StatusError, StatusReporter,
};

/// The cabin's collaborators
pub struct CabinIo<D, P, B, M, R, N> {
    pub door: D,
    pub position: P,
    pub buttons: B,
    pub motor: M,
    pub status: R,
    pub indicator: N,
}

/// Everything a cycle did, for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleReport {
    pub outcome: CycleOutcome,
    /// Result of applying the motor command
    pub motor: Result<(), MotorError>,
    /// Result of the status send, if one was due
    pub status: Option<Result<(), StatusError>>,
    /// New indication, if it changed
    pub indication: Option<IndicatorEvent>,
}

/// Cooperative control loop owning the tracker and its collaborators
pub struct ControlLoop<D, P, B, M, R, N> {
    tracker: FloorTracker,
    io: CabinIo<D, P, B, M, R, N>,
    indication: Option<IndicatorEvent>,
}

impl<D, P, B, M, R, N> ControlLoop<D, P, B, M, R, N>
where
    D: InterlockSensor,
    P: PositionSensor,
    B: RequestIntake,
    M: MotorDriver,
    R: StatusReporter,
    N: Indicator,
{
    pub fn new(config: &CabinConfig, io: CabinIo<D, P, B, M, R, N>) -> Self {
        Self {
            tracker: FloorTracker::new(config),
            io,
            indication: None,
        }
    }

    pub fn tracker(&self) -> &FloorTracker {
        &self.tracker
    }

    pub fn io(&self) -> &CabinIo<D, P, B, M, R, N> {
        &self.io
    }

    pub fn io_mut(&mut self) -> &mut CabinIo<D, P, B, M, R, N> {
        &mut self.io
    }

    /// Run one control cycle at monotonic time `now_ms`
    pub fn poll(&mut self, now_ms: u64) -> CycleReport {
        let inputs = self.sample();
        let outcome = self.tracker.cycle(inputs, now_ms);

        let motor = self.io.motor.apply(outcome.motor);
        let status = outcome
            .status
            .map(|floor| self.io.status.send_floor_status(floor));
        let indication = self.update_indicator(inputs.door_open);

        CycleReport {
            outcome,
            motor,
            status,
            indication,
        }
    }

    /// Read only the inputs the tracker will look at this cycle
    fn sample(&mut self) -> CycleInputs {
        let door_open = self.io.door.is_door_open();
        if door_open {
            return CycleInputs {
                door_open,
                ..Default::default()
            };
        }

        let cabin = self.tracker.cabin();
        let request = if cabin.in_motion() {
            None
        } else {
            self.io
                .buttons
                .pending_request(cabin.current_floor(), self.tracker.floor_count())
        };

        let magnet_present = if cabin.in_motion() || request.is_some() {
            self.io.position.is_magnet_present()
        } else {
            false
        };

        CycleInputs {
            door_open,
            request,
            magnet_present,
        }
    }

    fn update_indicator(&mut self, door_open: bool) -> Option<IndicatorEvent> {
        let cabin = self.tracker.cabin();
        let event = if door_open {
            IndicatorEvent::DoorBlocked
        } else {
            match cabin.direction() {
                Some(direction) => IndicatorEvent::Moving {
                    direction,
                    floor: cabin.current_floor(),
                },
                None => IndicatorEvent::Idle(cabin.current_floor()),
            }
        };

        if self.indication == Some(event) {
            return None;
        }
        self.indication = Some(event);
        self.io.indicator.notify(event);
        Some(event)
    }
}
