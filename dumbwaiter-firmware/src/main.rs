//! Dumbwaiter controller firmware
//!
//! Main firmware binary for RP2040-based dumbwaiter controllers. The cabin
//! logic lives in `dumbwaiter-core`; this crate wires it to the board pins
//! and the floor indicator bus.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

use dumbwaiter_core::control::{CabinIo, ControlLoop};
use dumbwaiter_drivers::{ButtonPanel, DoorLock, MagnetSensor, TwoWireMotor};

use crate::board::Board;
use crate::config::MACHINE_CONFIG;
use crate::io::{CallPanel, ChannelStatusReporter, SignalIndicator};

mod board;
mod channels;
mod config;
mod io;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Dumbwaiter firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = MACHINE_CONFIG;
    info!(
        "Configuration: {} floors, guard {} ms, cycle {} ms",
        config.cabin.floor_count, config.cabin.guard_delay_ms, config.cabin.cycle_interval_ms
    );

    let board = Board::init(p, &config.bus);
    info!("Bus UART initialized at {} baud", config.bus.baud_rate);

    let motor = unwrap!(TwoWireMotor::new(board.motor_up, board.motor_down));
    let io = CabinIo {
        door: DoorLock::new(board.door, config.inputs.door_open),
        position: MagnetSensor::new(board.magnet, config.inputs.magnet),
        buttons: CallPanel::new(ButtonPanel::new(board.buttons, config.inputs.buttons)),
        motor,
        status: ChannelStatusReporter,
        indicator: SignalIndicator,
    };
    let control = ControlLoop::new(&config.cabin, io);

    spawner
        .spawn(tasks::control_task(control, config.cabin.cycle_interval_ms))
        .unwrap();
    spawner
        .spawn(tasks::bus_tx_task(board.bus_tx, config.bus.status_refresh_ms))
        .unwrap();
    spawner
        .spawn(tasks::bus_rx_task(board.bus_rx, config.cabin.floor_count))
        .unwrap();

    info!("All tasks spawned, firmware running");

    loop {
        Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
