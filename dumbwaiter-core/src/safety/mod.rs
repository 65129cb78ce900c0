//! Safety interlock
//!
//! Door-lock supervision. The interlock has absolute priority over every
//! other rule in the control cycle.

pub mod interlock;

pub use interlock::{Interlock, InterlockState};
