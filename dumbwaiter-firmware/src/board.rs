//! Board pin assignments
//!
//! | signal       | pin        |
//! |--------------|------------|
//! | call buttons | GPIO2..4   |
//! | door lock    | GPIO5      |
//! | magnet       | GPIO6      |
//! | motor up     | GPIO7      |
//! | motor down   | GPIO8      |
//! | bus UART0    | GPIO0 (TX), GPIO1 (RX) |
//!
//! All switch inputs are pulled up; polarity comes from `[inputs]` in
//! machine.toml.

use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{
    BufferedInterruptHandler, BufferedUartRx, BufferedUartTx, Config as UartConfig, Uart,
};
use embassy_rp::Peripherals;
use static_cell::StaticCell;

use dumbwaiter_core::config::BusConfig;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

/// Local call buttons wired on this board
pub const BUTTON_COUNT: usize = 3;

// UART buffers must live forever
static TX_BUF: StaticCell<[u8; 64]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 64]> = StaticCell::new();

pub struct Board {
    pub buttons: [Input<'static>; BUTTON_COUNT],
    pub door: Input<'static>,
    pub magnet: Input<'static>,
    pub motor_up: Output<'static>,
    pub motor_down: Output<'static>,
    pub bus_tx: BufferedUartTx,
    pub bus_rx: BufferedUartRx,
}

impl Board {
    /// Claim the cabin pins and bring up the bus UART
    pub fn init(p: Peripherals, bus: &BusConfig) -> Self {
        let mut uart_config = UartConfig::default();
        uart_config.baudrate = bus.baud_rate;

        let tx_buf = TX_BUF.init([0u8; 64]);
        let rx_buf = RX_BUF.init([0u8; 64]);
        let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
        let (bus_tx, bus_rx) = uart.into_buffered(Irqs, tx_buf, rx_buf).split();

        Self {
            buttons: [
                Input::new(p.PIN_2, Pull::Up),
                Input::new(p.PIN_3, Pull::Up),
                Input::new(p.PIN_4, Pull::Up),
            ],
            door: Input::new(p.PIN_5, Pull::Up),
            magnet: Input::new(p.PIN_6, Pull::Up),
            // Motor outputs start released
            motor_up: Output::new(p.PIN_7, Level::Low),
            motor_down: Output::new(p.PIN_8, Level::Low),
            bus_tx,
            bus_rx,
        }
    }
}
