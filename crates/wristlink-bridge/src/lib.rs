//! Wristlink telemetry bridge.
//!
//! This crate connects to the wristlink companion daemon over its unix
//! socket, issues the initial attribute requests, and turns the daemon's
//! message stream into typed [`Event`]s delivered through a channel.
//!
//! ## Architecture
//!
//! Two activities share exactly one socket connection:
//!
//! - The caller's thread opens the socket and writes the request burst.
//!   All writes happen here, before the read loop starts, so reads and
//!   writes never race.
//! - A dedicated background thread owns the read side for the rest of the
//!   connection's life. Each blocking read produces one chunk, each chunk
//!   is decoded independently, and decoded messages flow to the consumer
//!   through an unbounded FIFO channel. Sending never blocks the reader.
//!
//! The stream ends with exactly one [`Event::ConnectionLost`], after which
//! the channel disconnects. The bridge never reconnects on its own.
//!
//! ## Key Types
//!
//! - [`Bridge`]: owns the connection, hands out the event receiver
//! - [`BridgeConfig`]: socket path and read-timeout settings
//! - [`Event`]: telemetry values delivered to the consumer
//! - [`LinkState`]: connection lifecycle, observable at any time
//!
//! ## Example
//!
//! ```rust,no_run
//! use wristlink_bridge::{Bridge, BridgeConfig, Event};
//!
//! let bridge = Bridge::connect(BridgeConfig::default())?;
//! for event in bridge.events().iter() {
//!     match event {
//!         Event::Battery(level) => println!("battery: {}%", level),
//!         Event::Heartrate(bpm) => println!("heart rate: {} BPM", bpm),
//!         Event::Steps(count) => println!("steps: {}", count),
//!         Event::ConnectionLost { cause } => println!("daemon gone: {}", cause),
//!     }
//! }
//! # Ok::<(), wristlink_bridge::BridgeError>(())
//! ```

mod bridge;
mod error;
mod event;
mod reader;

pub use bridge::{Bridge, BridgeConfig, LinkState, DEFAULT_SOCKET_PATH};
pub use error::BridgeError;
pub use event::Event;

pub use wristlink_protocol as protocol;
