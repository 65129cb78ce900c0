//! Bus UART transmit task
//!
//! Encodes floor status frames for the indicator units. The last floor is
//! re-sent periodically so units that power up late catch up.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_rp::uart::BufferedUartTx;
use embassy_time::Timer;
use embedded_io_async::Write;

use dumbwaiter_core::Floor;
use dumbwaiter_protocol::{ControllerMessage, MAX_FRAME_SIZE};

use crate::channels::STATUS_CHANNEL;

#[embassy_executor::task]
pub async fn bus_tx_task(mut tx: BufferedUartTx, status_refresh_ms: u32) {
    info!("Bus TX task started");

    // Power-on position
    let mut last = Floor::GROUND;
    send_status(&mut tx, last).await;

    loop {
        let floor = if status_refresh_ms == 0 {
            STATUS_CHANNEL.receive().await
        } else {
            match select(
                STATUS_CHANNEL.receive(),
                Timer::after_millis(u64::from(status_refresh_ms)),
            )
            .await
            {
                Either::First(floor) => floor,
                Either::Second(()) => last,
            }
        };

        last = floor;
        send_status(&mut tx, floor).await;
    }
}

async fn send_status(tx: &mut BufferedUartTx, floor: Floor) {
    let message = ControllerMessage::FloorStatus {
        floor: floor.number(),
    };
    let mut buf = [0u8; MAX_FRAME_SIZE];
    let len = match message.to_frame().and_then(|frame| frame.encode(&mut buf)) {
        Ok(len) => len,
        Err(e) => {
            warn!("Failed to encode floor status: {:?}", e);
            return;
        }
    };

    if let Err(e) = tx.write_all(&buf[..len]).await {
        warn!("Failed to send floor status: {:?}", e);
    } else {
        trace!("Floor status {} sent", floor.number());
    }
}
