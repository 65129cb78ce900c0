//! Collaborator traits
//!
//! These traits define the interface between the cabin logic and the
//! hardware or bus implementations it drives.

pub mod indicator;
pub mod intake;
pub mod motor;
pub mod sensor;
pub mod status;

pub use indicator::{Indicator, IndicatorEvent};
pub use intake::RequestIntake;
pub use motor::{MotorDriver, MotorError};
pub use sensor::{InterlockSensor, PositionSensor};
pub use status::{StatusError, StatusReporter};
