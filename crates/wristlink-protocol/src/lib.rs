//! Wristlink Socket Protocol
//!
//! This crate provides types and utilities for talking to the wristlink
//! companion daemon over its unix socket. The protocol is a single fixed
//! version with two frame directions, each identified by a 3-byte magic:
//!
//! - **Requests** (client → daemon): `"CMD"` + command byte + action byte +
//!   payload. The header is exactly 5 bytes; the payload is appended
//!   verbatim with no length prefix.
//! - **Messages** (daemon → client): `"MSG"` + kind byte + payload. The
//!   payload length is fixed by the kind (1 byte for battery and heart rate,
//!   4 bytes little-endian for the step count).
//!
//! The daemon never correlates a message with the request that caused it.
//! Messages arrive asynchronously and are identified by kind alone; a frame
//! is always written whole and always fits in a single socket read.
//!
//! # Example
//!
//! ```rust
//! use wristlink_protocol::{Command, Message};
//!
//! // Build a request frame
//! let frame = Command::Battery.encode();
//! assert_eq!(frame, [b'C', b'M', b'D', 83, 0]);
//!
//! // Parse a message frame
//! let message = Message::decode(&[b'M', b'S', b'G', 11, 78]).unwrap();
//! assert_eq!(message, Message::Battery(78));
//! ```

mod command;
mod constants;
mod error;
mod message;

pub use command::*;
pub use constants::*;
pub use error::*;
pub use message::*;
