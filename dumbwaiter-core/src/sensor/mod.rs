//! Position sensing
//!
//! Turns the raw magnet proximity signal into floor boundary crossings.

pub mod debounce;

pub use debounce::{Crossing, PositionDebouncer};
