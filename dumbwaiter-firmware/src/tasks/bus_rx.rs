//! Bus UART receive task
//!
//! Decodes call frames from the floor indicator units into the remote call
//! mask read by the control task.

use defmt::*;
use embassy_rp::uart::BufferedUartRx;
use embedded_io_async::Read;

use dumbwaiter_core::Floor;
use dumbwaiter_protocol::{Frame, FrameParser, IndicatorMessage};

use crate::channels::post_remote_call;

/// Buffer size for UART receive
const RX_BUF_SIZE: usize = 32;

#[embassy_executor::task]
pub async fn bus_rx_task(mut rx: BufferedUartRx, floor_count: u8) {
    info!("Bus RX task started");

    let mut parser = FrameParser::new();
    let mut buf = [0u8; RX_BUF_SIZE];

    loop {
        match rx.read(&mut buf).await {
            Ok(n) => {
                for &byte in &buf[..n] {
                    match parser.feed(byte) {
                        Ok(Some(frame)) => handle_frame(&frame, floor_count),
                        Ok(None) => {}
                        Err(e) => warn!("Frame parse error: {:?}", e),
                    }
                }
            }
            Err(e) => {
                warn!("UART read error: {:?}", e);
            }
        }
    }
}

fn handle_frame(frame: &Frame, floor_count: u8) {
    match IndicatorMessage::from_frame(frame) {
        Ok(IndicatorMessage::Call { floor }) => match Floor::new(floor, floor_count) {
            Some(floor) => {
                debug!("Remote call for floor {}", floor.number());
                post_remote_call(floor);
            }
            None => warn!("Call for floor {} outside 1..={}", floor, floor_count),
        },
        // Other stations' traffic, including our own status echo
        Err(_) => trace!("Ignoring frame {=u16:#x}", frame.id),
    }
}
