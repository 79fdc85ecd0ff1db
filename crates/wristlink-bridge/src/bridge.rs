//! Connection lifecycle for the companion daemon socket.

use std::io::Write;
use std::net::Shutdown;
use std::os::unix::net::UnixStream;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

use crossbeam_channel::Receiver;
use log::debug;
use wristlink_protocol::Command;

use crate::error::BridgeError;
use crate::event::Event;
use crate::reader;

/// Socket path the daemon binds by default, relative to the working
/// directory the daemon and client share.
pub const DEFAULT_SOCKET_PATH: &str = "../socket";

/// Configuration for a bridge connection.
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    /// Path of the daemon's unix socket.
    pub socket_path: PathBuf,
    /// Optional bound on each blocking read. A timed-out read is a
    /// recoverable no-data condition for the read loop, not a lost
    /// connection. `None` means reads block indefinitely.
    pub read_timeout: Option<Duration>,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        BridgeConfig {
            socket_path: PathBuf::from(DEFAULT_SOCKET_PATH),
            read_timeout: None,
        }
    }
}

impl BridgeConfig {
    /// Configuration pointing at the given socket path.
    pub fn with_socket_path(path: impl Into<PathBuf>) -> Self {
        BridgeConfig {
            socket_path: path.into(),
            ..BridgeConfig::default()
        }
    }
}

/// Connection lifecycle states.
///
/// `Closed` is terminal: no transition re-enters `Connecting`, and the
/// bridge never reconnects on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum LinkState {
    /// No connection attempt has been made yet.
    Disconnected = 0,
    /// A connection attempt is in progress.
    Connecting = 1,
    /// Connected; the read loop is running.
    Connected = 2,
    /// The connection is gone.
    Closed = 3,
}

impl LinkState {
    pub(crate) fn from_u8(value: u8) -> LinkState {
        match value {
            0 => LinkState::Disconnected,
            1 => LinkState::Connecting,
            2 => LinkState::Connected,
            _ => LinkState::Closed,
        }
    }
}

/// A live connection to the companion daemon.
///
/// Owns the one socket for the process's lifetime. The read side belongs to
/// the background thread from the moment [`Bridge::connect`] returns; the
/// caller's handle is used for lifecycle control only.
pub struct Bridge {
    stream: UnixStream,
    events: Receiver<Event>,
    state: Arc<AtomicU8>,
    reader: Option<JoinHandle<()>>,
}

impl Bridge {
    /// Connect to the daemon and start the telemetry stream.
    ///
    /// On success the initial request burst (name, battery, continuous
    /// heart rate on, steps, in that order) has been written and the
    /// background read loop is running. The burst expects no synchronous
    /// answers; whatever the daemon sends back arrives later as events.
    pub fn connect(config: BridgeConfig) -> Result<Bridge, BridgeError> {
        let state = Arc::new(AtomicU8::new(LinkState::Connecting as u8));

        let result = Bridge::open(config, Arc::clone(&state));
        if result.is_err() {
            state.store(LinkState::Closed as u8, Ordering::SeqCst);
        }
        result
    }

    fn open(config: BridgeConfig, state: Arc<AtomicU8>) -> Result<Bridge, BridgeError> {
        debug!("connecting to daemon socket {}", config.socket_path.display());

        let stream = UnixStream::connect(&config.socket_path).map_err(|source| {
            BridgeError::Connect {
                path: config.socket_path.clone(),
                source,
            }
        })?;

        if config.read_timeout.is_some() {
            stream.set_read_timeout(config.read_timeout)?;
        }

        // All writes happen here, before the read loop exists, so reads and
        // writes never overlap on the socket.
        for command in [
            Command::Name,
            Command::Battery,
            Command::HeartrateContinuous { enable: true },
            Command::Steps,
        ] {
            send(&stream, command)?;
        }

        let reader_stream = stream.try_clone()?;
        state.store(LinkState::Connected as u8, Ordering::SeqCst);
        let (handle, events) = reader::spawn(reader_stream, Arc::clone(&state));

        Ok(Bridge {
            stream,
            events,
            state,
            reader: Some(handle),
        })
    }

    /// Receiver for the telemetry event stream.
    ///
    /// Events arrive in delivery order and end with exactly one
    /// [`Event::ConnectionLost`], after which the channel disconnects.
    pub fn events(&self) -> &Receiver<Event> {
        &self.events
    }

    /// Current lifecycle state of the connection.
    pub fn state(&self) -> LinkState {
        LinkState::from_u8(self.state.load(Ordering::SeqCst))
    }

    /// Shut the connection down.
    ///
    /// Fails the blocked read in the background thread, which then emits
    /// the terminal [`Event::ConnectionLost`] and exits. Messages already
    /// in flight on the wire are not drained. Calling this on an
    /// already-closed connection is a no-op.
    pub fn close(&self) -> Result<(), BridgeError> {
        debug!("closing daemon connection");

        match self.stream.shutdown(Shutdown::Both) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotConnected => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    /// Wait for the background read loop to exit.
    ///
    /// Returns immediately if it has already exited or was joined before.
    pub fn join(&mut self) {
        if let Some(handle) = self.reader.take() {
            let _ = handle.join();
        }
    }
}

/// Write one request frame to the daemon.
///
/// The whole frame must go out in a single write. The protocol has no way
/// to resume a partial frame, so a short write fails the request and is
/// not retried; frames are small enough that the transport takes them
/// whole in practice.
fn send(mut stream: &UnixStream, command: Command) -> Result<(), BridgeError> {
    let frame = command.encode();
    let written = stream.write(&frame)?;

    if written != frame.len() {
        return Err(BridgeError::ShortWrite {
            expected: frame.len(),
            written,
        });
    }

    debug!("sent {:?} ({} bytes)", command, written);
    Ok(())
}
