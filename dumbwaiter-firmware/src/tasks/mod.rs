//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod bus_rx;
pub mod bus_tx;
pub mod control;

pub use bus_rx::bus_rx_task;
pub use bus_tx::bus_tx_task;
pub use control::{control_task, Controller};
