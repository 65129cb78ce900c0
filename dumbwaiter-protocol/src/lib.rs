//! Floor Status Bus Protocol
//!
//! This crate defines the serial protocol between the cabin controller and
//! the floor indicator units. Frames mirror a classic CAN data frame so the
//! same message set can move onto a CAN transceiver unchanged.
//!
//! # Protocol Overview
//!
//! ```text
//! ┌───────┬───────┬───────┬─────┬──────────┬──────────┐
//! │ START │ ID_HI │ ID_LO │ LEN │ DATA     │ CHECKSUM │
//! │ 1B    │ 1B    │ 1B    │ 1B  │ 0–8B     │ 1B       │
//! └───────┴───────┴───────┴─────┴──────────┴──────────┘
//! ```
//!
//! The controller broadcasts the cabin floor; indicator units forward their
//! call buttons.

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(unsafe_code)]

pub mod frame;
pub mod messages;

pub use frame::{Frame, FrameError, FrameParser, FRAME_START, MAX_DATA_LEN, MAX_FRAME_SIZE, MAX_ID};
pub use messages::{ControllerMessage, IndicatorMessage};
