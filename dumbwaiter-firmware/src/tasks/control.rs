//! Cabin control task
//!
//! Runs one control cycle per tick. This is the only task that touches the
//! cabin state.

use defmt::*;
use embassy_rp::gpio::{Input, Output};
use embassy_time::{Duration, Instant, Ticker};

use dumbwaiter_core::control::{ControlLoop, CycleReport};
use dumbwaiter_drivers::{DoorLock, MagnetSensor, TwoWireMotor};

use crate::channels::take_remote_calls;
use crate::io::{CallPanel, ChannelStatusReporter, SignalIndicator};

/// The board's concrete control loop
pub type Controller = ControlLoop<
    DoorLock<Input<'static>>,
    MagnetSensor<Input<'static>>,
    CallPanel,
    TwoWireMotor<Output<'static>, Output<'static>>,
    ChannelStatusReporter,
    SignalIndicator,
>;

#[embassy_executor::task]
pub async fn control_task(mut control: Controller, cycle_interval_ms: u32) {
    info!("Control task started");

    let mut ticker = Ticker::every(Duration::from_millis(u64::from(cycle_interval_ms)));

    loop {
        ticker.next().await;

        // Remote calls only count for the cycle that sees them
        control.io_mut().buttons.latch(take_remote_calls());

        let report = control.poll(Instant::now().as_millis());
        log_report(&report);
    }
}

fn log_report(report: &CycleReport) {
    let outcome = &report.outcome;
    if let Some(event) = outcome.event {
        if event.is_safety_event() {
            warn!("Door opened during travel, cabin stopped");
        } else {
            debug!("{:?}: {:?}, motor {:?}", outcome.rule, event, outcome.motor);
        }
    }
    if let Some(floor) = outcome.status {
        info!("Floor {}", floor.number());
    }
    if let Err(e) = report.motor {
        warn!("Motor output failed: {:?}", e);
    }
    if let Some(Err(e)) = report.status {
        warn!("Floor status dropped: {:?}", e);
    }
}
