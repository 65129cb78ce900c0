//! Frame encoding and decoding for the floor status bus.
//!
//! Frame format:
//! - START (1 byte): 0xAA synchronization byte
//! - ID_HI, ID_LO (2 bytes): 11-bit message identifier, big-endian
//! - LEN (1 byte): data length (0-8)
//! - DATA (0-8 bytes): message-specific data
//! - CHECKSUM (1 byte): XOR of ID_HI, ID_LO, LEN, and all DATA bytes

use heapless::Vec;

/// Frame synchronization byte
pub const FRAME_START: u8 = 0xAA;

/// Maximum data length in bytes
pub const MAX_DATA_LEN: usize = 8;

/// Largest 11-bit identifier
pub const MAX_ID: u16 = 0x7FF;

/// Maximum complete frame size (START + ID + LEN + DATA + CHECKSUM)
pub const MAX_FRAME_SIZE: usize = 1 + 2 + 1 + MAX_DATA_LEN + 1;

/// Errors that can occur during frame parsing or encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Data exceeds eight bytes
    PayloadTooLarge,
    /// Identifier does not fit in 11 bits
    InvalidId,
    /// Checksum mismatch
    InvalidChecksum,
    /// Invalid frame structure or unknown message
    InvalidFrame,
    /// Buffer too small for encoding
    BufferTooSmall,
}

/// A parsed or constructed frame
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    /// Message identifier
    pub id: u16,
    /// Frame data
    pub data: Vec<u8, MAX_DATA_LEN>,
}

impl Frame {
    /// Create a new frame with the given identifier and data
    pub fn new(id: u16, data: &[u8]) -> Result<Self, FrameError> {
        if id > MAX_ID {
            return Err(FrameError::InvalidId);
        }

        let mut buffer = Vec::new();
        buffer
            .extend_from_slice(data)
            .map_err(|_| FrameError::PayloadTooLarge)?;

        Ok(Self { id, data: buffer })
    }

    fn checksum(id: u16, data: &[u8]) -> u8 {
        let [hi, lo] = id.to_be_bytes();
        data.iter().fold(hi ^ lo ^ data.len() as u8, |acc, &byte| acc ^ byte)
    }

    /// Encoded size of this frame
    pub fn encoded_len(&self) -> usize {
        5 + self.data.len()
    }

    /// Encode this frame into a byte buffer
    ///
    /// Returns the number of bytes written
    pub fn encode(&self, buffer: &mut [u8]) -> Result<usize, FrameError> {
        let frame_len = self.encoded_len();
        if buffer.len() < frame_len {
            return Err(FrameError::BufferTooSmall);
        }

        let [hi, lo] = self.id.to_be_bytes();
        let end = 4 + self.data.len();
        buffer[0] = FRAME_START;
        buffer[1] = hi;
        buffer[2] = lo;
        buffer[3] = self.data.len() as u8;
        buffer[4..end].copy_from_slice(&self.data);
        buffer[end] = Self::checksum(self.id, &self.data);

        Ok(frame_len)
    }

    /// Encode this frame into a heapless Vec
    pub fn encode_to_vec(&self) -> Result<Vec<u8, MAX_FRAME_SIZE>, FrameError> {
        let mut buffer = [0u8; MAX_FRAME_SIZE];
        let len = self.encode(&mut buffer)?;
        Vec::from_slice(&buffer[..len]).map_err(|_| FrameError::BufferTooSmall)
    }
}

/// State machine for parsing incoming frames
#[derive(Debug, Clone)]
pub struct FrameParser {
    state: ParseState,
    id: u16,
    expected_len: u8,
    buffer: Vec<u8, MAX_DATA_LEN>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    /// Waiting for START byte
    WaitingForStart,
    /// Got START, waiting for ID_HI
    WaitingForIdHigh,
    /// Got ID_HI, waiting for ID_LO
    WaitingForIdLow,
    /// Got the identifier, waiting for LEN
    WaitingForLength,
    /// Reading data bytes
    ReadingData,
    /// Waiting for CHECKSUM
    WaitingForChecksum,
}

impl Default for FrameParser {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameParser {
    pub fn new() -> Self {
        Self {
            state: ParseState::WaitingForStart,
            id: 0,
            expected_len: 0,
            buffer: Vec::new(),
        }
    }

    /// Reset the parser state
    pub fn reset(&mut self) {
        self.state = ParseState::WaitingForStart;
        self.id = 0;
        self.expected_len = 0;
        self.buffer.clear();
    }

    /// Feed a single byte to the parser
    ///
    /// Returns `Ok(Some(frame))` when a complete valid frame is parsed,
    /// `Ok(None)` when more bytes are needed, or `Err` on parse error.
    pub fn feed(&mut self, byte: u8) -> Result<Option<Frame>, FrameError> {
        match self.state {
            ParseState::WaitingForStart => {
                if byte == FRAME_START {
                    self.state = ParseState::WaitingForIdHigh;
                }
                Ok(None)
            }
            ParseState::WaitingForIdHigh => {
                // Only three identifier bits live in the high byte
                if u16::from(byte) > MAX_ID >> 8 {
                    self.reset();
                    return Err(FrameError::InvalidId);
                }
                self.id = u16::from(byte) << 8;
                self.state = ParseState::WaitingForIdLow;
                Ok(None)
            }
            ParseState::WaitingForIdLow => {
                self.id |= u16::from(byte);
                self.state = ParseState::WaitingForLength;
                Ok(None)
            }
            ParseState::WaitingForLength => {
                if usize::from(byte) > MAX_DATA_LEN {
                    self.reset();
                    return Err(FrameError::PayloadTooLarge);
                }
                self.expected_len = byte;
                self.buffer.clear();
                self.state = if byte == 0 {
                    ParseState::WaitingForChecksum
                } else {
                    ParseState::ReadingData
                };
                Ok(None)
            }
            ParseState::ReadingData => {
                if self.buffer.push(byte).is_err() {
                    self.reset();
                    return Err(FrameError::InvalidFrame);
                }
                if self.buffer.len() == usize::from(self.expected_len) {
                    self.state = ParseState::WaitingForChecksum;
                }
                Ok(None)
            }
            ParseState::WaitingForChecksum => {
                if byte != Frame::checksum(self.id, &self.buffer) {
                    self.reset();
                    return Err(FrameError::InvalidChecksum);
                }

                let frame = Frame {
                    id: self.id,
                    data: self.buffer.clone(),
                };
                self.reset();
                Ok(Some(frame))
            }
        }
    }

    /// Feed multiple bytes to the parser
    ///
    /// Returns the first complete frame found, if any.
    /// Remaining bytes after a complete frame are not consumed.
    pub fn feed_bytes(&mut self, bytes: &[u8]) -> Result<Option<Frame>, FrameError> {
        for &byte in bytes {
            if let Some(frame) = self.feed(byte)? {
                return Ok(Some(frame));
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_encode_layout() {
        let frame = Frame::new(0x100, &[2]).unwrap();
        let mut buffer = [0u8; MAX_FRAME_SIZE];
        let len = frame.encode(&mut buffer).unwrap();

        assert_eq!(len, 6);
        assert_eq!(buffer[0], FRAME_START);
        assert_eq!(buffer[1], 0x01); // id high
        assert_eq!(buffer[2], 0x00); // id low
        assert_eq!(buffer[3], 1); // len
        assert_eq!(buffer[4], 2); // floor
        assert_eq!(buffer[5], 0x01 ^ 0x00 ^ 1 ^ 2);
    }

    #[test]
    fn test_encode_empty_data() {
        let frame = Frame::new(0x7FF, &[]).unwrap();
        let encoded = frame.encode_to_vec().unwrap();
        assert_eq!(&encoded[..], &[FRAME_START, 0x07, 0xFF, 0, 0x07 ^ 0xFF]);
    }

    #[test]
    fn test_buffer_too_small() {
        let frame = Frame::new(0x100, &[1, 2, 3]).unwrap();
        let mut buffer = [0u8; 7];
        assert_eq!(frame.encode(&mut buffer), Err(FrameError::BufferTooSmall));
    }

    #[test]
    fn test_invalid_id() {
        assert_eq!(Frame::new(0x800, &[]), Err(FrameError::InvalidId));

        let mut parser = FrameParser::new();
        assert_eq!(parser.feed_bytes(&[FRAME_START, 0x08]), Err(FrameError::InvalidId));
    }

    #[test]
    fn test_data_too_large() {
        assert_eq!(Frame::new(0x100, &[0; 9]), Err(FrameError::PayloadTooLarge));

        let mut parser = FrameParser::new();
        assert_eq!(
            parser.feed_bytes(&[FRAME_START, 0x01, 0x00, 9]),
            Err(FrameError::PayloadTooLarge)
        );
    }

    #[test]
    fn test_parser_invalid_checksum() {
        let mut encoded = Frame::new(0x180, &[3]).unwrap().encode_to_vec().unwrap();
        let last = encoded.len() - 1;
        encoded[last] ^= 0xFF;

        let mut parser = FrameParser::new();
        assert_eq!(parser.feed_bytes(&encoded), Err(FrameError::InvalidChecksum));
    }

    #[test]
    fn test_parser_resync_after_garbage() {
        let encoded = Frame::new(0x180, &[2]).unwrap().encode_to_vec().unwrap();

        let mut data = Vec::<u8, 32>::new();
        data.extend_from_slice(&[0x00, 0xFF, 0x12, 0x34]).unwrap();
        data.extend_from_slice(&encoded).unwrap();

        let mut parser = FrameParser::new();
        let parsed = parser.feed_bytes(&data).unwrap().unwrap();
        assert_eq!(parsed.id, 0x180);
        assert_eq!(&parsed.data[..], &[2]);
    }

    #[test]
    fn test_parser_recovers_after_error() {
        let mut parser = FrameParser::new();
        assert!(parser.feed_bytes(&[FRAME_START, 0x01, 0x00, 1, 5, 0x00]).is_err());

        let encoded = Frame::new(0x100, &[1]).unwrap().encode_to_vec().unwrap();
        assert!(parser.feed_bytes(&encoded).unwrap().is_some());
    }

    proptest! {
        #[test]
        fn prop_parser_never_panics(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
            let mut parser = FrameParser::new();
            for byte in bytes {
                if let Ok(Some(frame)) = parser.feed(byte) {
                    prop_assert!(frame.id <= MAX_ID);
                    prop_assert!(frame.data.len() <= MAX_DATA_LEN);
                }
            }
        }

        #[test]
        fn prop_encoded_frames_parse(id in 0u16..=MAX_ID, data in proptest::collection::vec(any::<u8>(), 0..=MAX_DATA_LEN)) {
            let frame = Frame::new(id, &data).unwrap();
            let encoded = frame.encode_to_vec().unwrap();
            let mut parser = FrameParser::new();
            prop_assert_eq!(parser.feed_bytes(&encoded).unwrap(), Some(frame));
        }
    }
}
