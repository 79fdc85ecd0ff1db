//! Protocol error types.

use thiserror::Error;

/// Errors that can occur when decoding daemon messages.
///
/// None of these are fatal to a session. The dispatch loop discards the
/// offending chunk and keeps reading; only connection-level I/O failures
/// end the stream.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// Chunk is too short to hold a message header.
    #[error("chunk too short: expected at least {expected} bytes, got {actual}")]
    FrameTooShort {
        /// Expected minimum length.
        expected: usize,
        /// Actual length received.
        actual: usize,
    },

    /// Chunk does not start with the `"MSG"` magic.
    #[error("bad message magic: {actual:02X?}")]
    BadMagic {
        /// The three bytes found where the magic should be.
        actual: [u8; 3],
    },

    /// Kind byte is not a known message kind.
    #[error("unknown message kind: 0x{0:02X}")]
    UnknownKind(u8),

    /// The kind requires more payload bytes than the chunk holds.
    #[error("truncated payload for kind 0x{kind:02X}: expected {expected} bytes, got {actual}")]
    TruncatedPayload {
        /// Kind byte declared by the frame.
        kind: u8,
        /// Payload length the kind requires.
        expected: usize,
        /// Payload bytes actually present in the chunk.
        actual: usize,
    },
}
