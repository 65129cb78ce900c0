//! Configuration types
//!
//! Board-agnostic configuration structures. The firmware deserializes these
//! from `machine.toml` at build time (behind the `serde` feature).

pub mod hardware;
pub mod types;

pub use hardware::*;
pub use types::*;
