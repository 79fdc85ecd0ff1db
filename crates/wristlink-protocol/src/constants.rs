//! Protocol constants
//!
//! Command codes, message kinds, and framing values for the wristlink
//! daemon socket protocol. Command codes and message kinds are distinct
//! namespaces: a request code never appears in a message frame.

// ============================================================================
// Framing
// ============================================================================

/// Magic prefix of every request frame (client → daemon).
pub const CMD_MAGIC: [u8; 3] = *b"CMD";
/// Magic prefix of every message frame (daemon → client).
pub const MSG_MAGIC: [u8; 3] = *b"MSG";
/// Size of a request header: magic + command byte + action byte.
pub const REQUEST_HEADER_SIZE: usize = 5;
/// Size of a message header: magic + kind byte.
pub const MESSAGE_HEADER_SIZE: usize = 4;
/// Read buffer size used by the dispatch loop. Every message frame is at
/// most 8 bytes, so a single read always covers a whole frame.
pub const READ_CHUNK_SIZE: usize = 16;

// ============================================================================
// Command Codes (client → daemon)
// ============================================================================

/// Request the battery level.
pub const CMD_BATTERY: u8 = 83;
/// Request a one-shot heart-rate measurement.
pub const CMD_HEARTRATE: u8 = 139;
/// Enable or disable continuous heart-rate streaming.
pub const CMD_HEARTRATE_CONTINUOUS: u8 = 173;
/// Request the device name.
pub const CMD_NAME: u8 = 244;
/// Request the step count.
pub const CMD_STEPS: u8 = 80;

// ============================================================================
// Action Codes
// ============================================================================

/// Read the attribute named by the command.
pub const ACTION_GET: u8 = 0;
/// Write the attribute named by the command.
pub const ACTION_SET: u8 = 1;

// ============================================================================
// Message Kinds (daemon → client)
// ============================================================================

/// Battery level message, 1-byte payload.
pub const MSG_BATTERY: u8 = 11;
/// Heart-rate message, 1-byte payload.
pub const MSG_HEARTRATE: u8 = 12;
/// Step-count message, 4-byte little-endian payload.
pub const MSG_STEPS: u8 = 13;
