//! Message types for the floor status bus
//!
//! - Controller → indicators: cabin floor status
//! - Indicator → controller: remote call buttons
//!
//! Floors travel as their 1-based number. Range checks against the
//! configured floor count happen at the receiver.

use crate::frame::{Frame, FrameError};

/// Cabin floor broadcast
pub const ID_FLOOR_STATUS: u16 = 0x100;
/// Call button on a floor indicator unit
pub const ID_FLOOR_CALL: u16 = 0x180;

/// Read a floor number from a single-byte payload
fn floor_from(frame: &Frame) -> Result<u8, FrameError> {
    match frame.data.first() {
        Some(&floor) if floor > 0 => Ok(floor),
        _ => Err(FrameError::InvalidFrame),
    }
}

/// Messages from the controller to the indicator units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControllerMessage {
    /// Cabin is at, or last passed, `floor`
    FloorStatus { floor: u8 },
}

impl ControllerMessage {
    /// Encode this message into a frame
    pub fn to_frame(&self) -> Result<Frame, FrameError> {
        match self {
            ControllerMessage::FloorStatus { floor } => Frame::new(ID_FLOOR_STATUS, &[*floor]),
        }
    }

    /// Parse a message from a frame (indicator side)
    pub fn from_frame(frame: &Frame) -> Result<Self, FrameError> {
        match frame.id {
            ID_FLOOR_STATUS => Ok(ControllerMessage::FloorStatus {
                floor: floor_from(frame)?,
            }),
            _ => Err(FrameError::InvalidFrame),
        }
    }
}

/// Messages from an indicator unit to the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IndicatorMessage {
    /// Call button pressed for `floor`
    Call { floor: u8 },
}

impl IndicatorMessage {
    /// Parse a message from a frame
    pub fn from_frame(frame: &Frame) -> Result<Self, FrameError> {
        match frame.id {
            ID_FLOOR_CALL => Ok(IndicatorMessage::Call {
                floor: floor_from(frame)?,
            }),
            _ => Err(FrameError::InvalidFrame),
        }
    }

    /// Encode this message into a frame (for testing or simulation)
    pub fn to_frame(&self) -> Result<Frame, FrameError> {
        match self {
            IndicatorMessage::Call { floor } => Frame::new(ID_FLOOR_CALL, &[*floor]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::FrameParser;

    #[test]
    fn test_floor_status_frame() {
        let frame = ControllerMessage::FloorStatus { floor: 2 }.to_frame().unwrap();
        assert_eq!(frame.id, ID_FLOOR_STATUS);
        assert_eq!(&frame.data[..], &[2]);
    }

    #[test]
    fn test_call_from_wire() {
        let bytes = IndicatorMessage::Call { floor: 3 }
            .to_frame()
            .unwrap()
            .encode_to_vec()
            .unwrap();

        let mut parser = FrameParser::new();
        let frame = parser.feed_bytes(&bytes).unwrap().unwrap();
        assert_eq!(
            IndicatorMessage::from_frame(&frame),
            Ok(IndicatorMessage::Call { floor: 3 })
        );
    }

    #[test]
    fn test_unknown_id_rejected() {
        let frame = Frame::new(0x123, &[1]).unwrap();
        assert_eq!(IndicatorMessage::from_frame(&frame), Err(FrameError::InvalidFrame));
        assert_eq!(ControllerMessage::from_frame(&frame), Err(FrameError::InvalidFrame));
    }

    #[test]
    fn test_status_is_not_a_call() {
        let frame = ControllerMessage::FloorStatus { floor: 1 }.to_frame().unwrap();
        assert_eq!(IndicatorMessage::from_frame(&frame), Err(FrameError::InvalidFrame));
    }

    #[test]
    fn test_empty_or_zero_floor_rejected() {
        let empty = Frame::new(ID_FLOOR_CALL, &[]).unwrap();
        assert_eq!(IndicatorMessage::from_frame(&empty), Err(FrameError::InvalidFrame));

        let zero = Frame::new(ID_FLOOR_CALL, &[0]).unwrap();
        assert_eq!(IndicatorMessage::from_frame(&zero), Err(FrameError::InvalidFrame));
    }
}
