//! Bridge error types.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced to the caller by the connection manager.
///
/// Read-side failures never appear here; the read loop reports them as a
/// terminal [`Event::ConnectionLost`](crate::Event::ConnectionLost) on the
/// event channel instead.
#[derive(Error, Debug)]
pub enum BridgeError {
    /// Opening the daemon socket failed. Fatal for the session.
    #[error("failed to connect to daemon socket {path}: {source}")]
    Connect {
        /// Socket path the connection was attempted on.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// The transport accepted fewer bytes than the frame holds. The frame
    /// cannot be resumed, so the request is lost; it is never retried.
    #[error("short write: frame is {expected} bytes, transport accepted {written}")]
    ShortWrite {
        /// Length of the encoded frame.
        expected: usize,
        /// Bytes the transport actually took.
        written: usize,
    },

    /// Any other I/O failure while writing a request or configuring the
    /// socket.
    #[error(transparent)]
    Io(#[from] io::Error),
}
