//! Floor tracker
//!
//! Runs one control cycle at a time:
//!
//! 1. Sample the interlock. If the door is open, stop any trip and do
//!    nothing else.
//! 2. If idle, accept a call for a floor other than the current one.
//! 3. If moving (including a trip started in step 2), drive the motor,
//!    feed the magnet sensor to the debouncer and count crossings.
//!
//! Every floor count change and every stop produces one status report.

use super::cabin::CabinState;
use super::events::Event;
use super::machine::{State, Trip};
use super::rules::{self, Rule};
use crate::config::CabinConfig;
use crate::floor::Floor;
use crate::motion::{motor_command, MotorCommand};
use crate::safety::{Interlock, InterlockState};
use crate::sensor::Crossing;

/// Sensor and button readings for one cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleInputs {
    /// Door-lock contact reports the door open
    pub door_open: bool,
    /// Call selected by the request intake (ignored unless idle)
    pub request: Option<Floor>,
    /// Proximity sensor sees a magnet (ignored unless moving)
    pub magnet_present: bool,
}

/// What a cycle decided
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleOutcome {
    /// Rule that governed the cycle
    pub rule: Rule,
    /// State machine event raised, if any
    pub event: Option<Event>,
    /// Motor output to apply
    pub motor: MotorCommand,
    /// Floor to report on the status bus
    pub status: Option<Floor>,
}

impl CycleOutcome {
    fn new(rule: Rule) -> Self {
        Self {
            rule,
            event: None,
            motor: MotorCommand::Halt,
            status: None,
        }
    }
}

/// Cabin state machine driver
#[derive(Debug, Clone)]
pub struct FloorTracker {
    cabin: CabinState,
    interlock: Interlock,
    floor_count: u8,
}

impl FloorTracker {
    /// Create a tracker at the ground floor, idle
    pub fn new(config: &CabinConfig) -> Self {
        Self {
            cabin: CabinState::new(config.guard_delay_ms),
            interlock: Interlock::new(),
            floor_count: config.floor_count,
        }
    }

    /// Read-only view of the cabin state
    pub fn cabin(&self) -> &CabinState {
        &self.cabin
    }

    /// Configured number of floors
    pub fn floor_count(&self) -> u8 {
        self.floor_count
    }

    /// Interlock condition from the last cycle
    pub fn interlock(&self) -> InterlockState {
        self.interlock.state()
    }

    /// Check if the cabin is idle (calls are only sampled then)
    pub fn is_idle(&self) -> bool {
        !self.cabin.in_motion()
    }

    /// Run one control cycle at monotonic time `now_ms`
    pub fn cycle(&mut self, inputs: CycleInputs, now_ms: u64) -> CycleOutcome {
        let interlock = self.interlock.sample(inputs.door_open);
        let rule = rules::select(interlock, self.cabin.state);
        let mut outcome = CycleOutcome::new(rule);

        match rule {
            Rule::Interlock => {
                if self.cabin.in_motion() {
                    self.apply(Event::DoorOpened, &mut outcome);
                }
                return outcome;
            }
            Rule::IdleIntake => {
                let trip = inputs
                    .request
                    .filter(|floor| floor.number() <= self.floor_count)
                    .and_then(|floor| Trip::plan(self.cabin.current, floor));
                match trip {
                    Some(trip) => self.apply(Event::Requested(trip), &mut outcome),
                    None => return outcome,
                }
            }
            Rule::MotionInProgress => {}
        }

        self.advance(inputs.magnet_present, now_ms, &mut outcome);
        outcome.motor = motor_command(self.cabin.destination_floor(), self.cabin.current, interlock);
        outcome
    }

    /// Count a crossing if the debouncer confirms one
    fn advance(&mut self, magnet_present: bool, now_ms: u64, outcome: &mut CycleOutcome) {
        let Some(trip) = self.cabin.state.trip() else {
            return;
        };

        if self.cabin.sensor.observe(magnet_present, now_ms) != Crossing::Crossed {
            return;
        }

        match self.cabin.current.step(trip.direction, self.floor_count) {
            Some(next) => {
                self.cabin.current = next;
                self.apply(Event::Crossed(next), outcome);
            }
            None => {
                // Only reachable if the shaft has more magnets than floors
                self.cabin.state = State::Idle;
                self.cabin.sensor.disarm();
                outcome.status = Some(self.cabin.current);
            }
        }
    }

    /// Transition on `event` and perform its side effects
    fn apply(&mut self, event: Event, outcome: &mut CycleOutcome) {
        let was_moving = self.cabin.in_motion();
        self.cabin.state = self.cabin.state.transition(event);

        match event {
            Event::Requested(_) => self.cabin.sensor.disarm(),
            Event::Crossed(floor) => outcome.status = Some(floor),
            Event::DoorOpened => outcome.status = Some(self.cabin.current),
        }

        if was_moving && !self.cabin.in_motion() {
            self.cabin.sensor.disarm();
        }
        outcome.event = Some(event);
    }
}
