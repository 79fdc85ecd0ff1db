//! Telemetry messages received from the companion daemon.

use bytes::Buf;

use crate::constants::*;
use crate::error::ProtocolError;

/// Telemetry messages the daemon pushes over the socket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Battery level. The device reports 0-100; the wire field holds 0-255.
    Battery(u8),
    /// Heart rate in beats per minute.
    Heartrate(u8),
    /// Total step count.
    Steps(u32),
}

impl Message {
    /// Get the wire kind for this message.
    pub fn kind(&self) -> u8 {
        match self {
            Message::Battery(_) => MSG_BATTERY,
            Message::Heartrate(_) => MSG_HEARTRATE,
            Message::Steps(_) => MSG_STEPS,
        }
    }

    /// Decode one message from the chunk produced by a single socket read.
    ///
    /// The decoder is stateless: frames never span reads, so each chunk is
    /// judged on its own and nothing is buffered between calls. Any failure
    /// means the caller discards the whole chunk; there is no
    /// resynchronization within it. Payload bytes past the frame are
    /// ignored, and bytes beyond the chunk are never touched.
    pub fn decode(chunk: &[u8]) -> Result<Message, ProtocolError> {
        if chunk.len() < MESSAGE_HEADER_SIZE {
            return Err(ProtocolError::FrameTooShort {
                expected: MESSAGE_HEADER_SIZE,
                actual: chunk.len(),
            });
        }

        if chunk[..3] != MSG_MAGIC {
            return Err(ProtocolError::BadMagic {
                actual: [chunk[0], chunk[1], chunk[2]],
            });
        }

        let kind = chunk[3];
        let expected = match kind {
            MSG_BATTERY | MSG_HEARTRATE => 1,
            MSG_STEPS => 4,
            other => return Err(ProtocolError::UnknownKind(other)),
        };

        let mut payload = &chunk[MESSAGE_HEADER_SIZE..];
        if payload.remaining() < expected {
            return Err(ProtocolError::TruncatedPayload {
                kind,
                expected,
                actual: payload.remaining(),
            });
        }

        Ok(match kind {
            MSG_BATTERY => Message::Battery(payload.get_u8()),
            MSG_HEARTRATE => Message::Heartrate(payload.get_u8()),
            _ => Message::Steps(payload.get_u32_le()),
        })
    }

    /// Encode the message as a complete frame, the way the daemon frames it
    /// on the wire: `"MSG"` + kind byte + payload.
    pub fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(MESSAGE_HEADER_SIZE + 4);
        buf.extend_from_slice(&MSG_MAGIC);
        buf.push(self.kind());

        match self {
            Message::Battery(value) | Message::Heartrate(value) => buf.push(*value),
            Message::Steps(count) => buf.extend_from_slice(&count.to_le_bytes()),
        }

        buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_battery() {
        let message = Message::decode(&[b'M', b'S', b'G', 11, 78]).unwrap();
        assert_eq!(message, Message::Battery(78));
    }

    #[test]
    fn test_decode_steps_little_endian() {
        let message = Message::decode(&[b'M', b'S', b'G', 13, 0x05, 0x04, 0x00, 0x00]).unwrap();
        assert_eq!(message, Message::Steps(1029));
    }

    #[test]
    fn test_decode_round_trips_full_value_range() {
        // The wire field is wider than the 0-100 domain; every byte value
        // must survive decoding untouched.
        for value in [0u8, 1, 78, 100, 101, 254, 255] {
            let battery = Message::decode(&Message::Battery(value).encode()).unwrap();
            assert_eq!(battery, Message::Battery(value));

            let heartrate = Message::decode(&Message::Heartrate(value).encode()).unwrap();
            assert_eq!(heartrate, Message::Heartrate(value));
        }

        for count in [0u32, 1, 1029, 65_536, u32::MAX - 1, u32::MAX] {
            let steps = Message::decode(&Message::Steps(count).encode()).unwrap();
            assert_eq!(steps, Message::Steps(count));
        }
    }

    #[test]
    fn test_decode_rejects_bad_magic() {
        let err = Message::decode(&[b'C', b'M', b'D', 11, 78]).unwrap_err();
        assert_eq!(
            err,
            ProtocolError::BadMagic {
                actual: [b'C', b'M', b'D'],
            }
        );
    }

    #[test]
    fn test_decode_rejects_runt_chunks() {
        for chunk in [&[][..], &[b'M'][..], &[b'M', b'S'][..], &[b'M', b'S', b'G'][..]] {
            let err = Message::decode(chunk).unwrap_err();
            assert_eq!(
                err,
                ProtocolError::FrameTooShort {
                    expected: MESSAGE_HEADER_SIZE,
                    actual: chunk.len(),
                }
            );
        }
    }

    #[test]
    fn test_decode_rejects_unknown_kinds() {
        for kind in [0u8, 10, 14, 83, 255] {
            let err = Message::decode(&[b'M', b'S', b'G', kind, 0, 0, 0, 0]).unwrap_err();
            assert_eq!(err, ProtocolError::UnknownKind(kind));
        }
    }

    #[test]
    fn test_decode_rejects_truncated_payloads() {
        // A header declaring a kind whose payload is missing entirely.
        let err = Message::decode(&[b'M', b'S', b'G', 11]).unwrap_err();
        assert_eq!(
            err,
            ProtocolError::TruncatedPayload {
                kind: 11,
                expected: 1,
                actual: 0,
            }
        );

        // A step-count frame cut short mid-payload.
        let err = Message::decode(&[b'M', b'S', b'G', 13, 0x05, 0x04]).unwrap_err();
        assert_eq!(
            err,
            ProtocolError::TruncatedPayload {
                kind: 13,
                expected: 4,
                actual: 2,
            }
        );
    }

    #[test]
    fn test_decode_ignores_trailing_bytes() {
        // The read buffer may be longer than the frame; trailing bytes are
        // not part of the payload.
        let mut chunk = Message::Battery(42).encode();
        chunk.extend_from_slice(&[0xAA; 11]);
        assert_eq!(Message::decode(&chunk).unwrap(), Message::Battery(42));
    }
}
