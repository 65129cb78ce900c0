//! Inter-task communication channels
//!
//! Defines the statics shared between Embassy tasks. The control task owns
//! the cabin state; everything else talks to it through these.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;
use portable_atomic::{AtomicU8, Ordering};

use dumbwaiter_core::traits::IndicatorEvent;
use dumbwaiter_core::Floor;

/// Channel capacity for outgoing floor status
const STATUS_CHANNEL_SIZE: usize = 8;

/// Floor status reports waiting for the bus transmitter
pub static STATUS_CHANNEL: Channel<CriticalSectionRawMutex, Floor, STATUS_CHANNEL_SIZE> =
    Channel::new();

/// Latest cabin indication, for a local display
pub static INDICATOR: Signal<CriticalSectionRawMutex, IndicatorEvent> = Signal::new();

/// Remote calls received since the last control cycle, one bit per floor index
static REMOTE_CALLS: AtomicU8 = AtomicU8::new(0);

/// Record a remote call for `floor`
pub fn post_remote_call(floor: Floor) {
    REMOTE_CALLS.fetch_or(1 << floor.index(), Ordering::AcqRel);
}

/// Take all pending remote calls, clearing them
pub fn take_remote_calls() -> u8 {
    REMOTE_CALLS.swap(0, Ordering::AcqRel)
}
