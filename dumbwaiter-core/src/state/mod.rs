//! Floor tracker state machine
//!
//! Defines the authoritative cabin behavior. The state machine is explicit,
//! finite, and deterministic; all motor output and status reporting is a
//! function of the current state and the event raised in a cycle.

pub mod cabin;
pub mod events;
pub mod machine;
pub mod rules;
pub mod tracker;

pub use cabin::CabinState;
pub use events::Event;
pub use machine::{State, Trip};
pub use rules::Rule;
pub use tracker::{CycleInputs, CycleOutcome, FloorTracker};
