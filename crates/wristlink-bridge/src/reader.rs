//! Background read loop turning socket bytes into events.

use std::io::{self, Read};
use std::os::unix::net::UnixStream;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{Receiver, Sender};
use log::{debug, trace, warn};
use wristlink_protocol::{Message, READ_CHUNK_SIZE};

use crate::bridge::LinkState;
use crate::event::Event;

/// Spawn the reader thread for a connected socket.
///
/// Returns the thread handle and the consumer end of the event channel.
/// The channel is unbounded: telemetry arrives well under ten events per
/// second, and the reader must never block on a slow consumer.
pub(crate) fn spawn(
    stream: UnixStream,
    state: Arc<AtomicU8>,
) -> (JoinHandle<()>, Receiver<Event>) {
    let (tx, rx) = crossbeam_channel::unbounded();

    let handle = thread::Builder::new()
        .name("wristlink-reader".to_string())
        .spawn(move || read_loop(stream, tx, state))
        .expect("Failed to spawn reader thread");

    (handle, rx)
}

/// Blocking read loop: one read, one decode attempt, at most one event.
///
/// Bytes are not accumulated across reads; each read's chunk is framed
/// independently. The loop runs until the socket fails or closes, reports
/// that as a single terminal [`Event::ConnectionLost`], and never reads
/// again. Dropping the sender on exit disconnects the event channel.
fn read_loop(mut stream: UnixStream, events: Sender<Event>, state: Arc<AtomicU8>) {
    let mut buf = [0u8; READ_CHUNK_SIZE];

    loop {
        match stream.read(&mut buf) {
            Ok(0) => {
                debug!("daemon closed the connection");
                let _ = events.send(Event::ConnectionLost {
                    cause: "connection closed by peer".to_string(),
                });
                break;
            }
            Ok(read) => dispatch(&buf[..read], &events),
            Err(err) if no_data(&err) => {
                // Bounded read timeout configured on the socket; nothing
                // arrived in time. Recoverable.
                trace!("read timed out with no data");
            }
            Err(err) => {
                warn!("read failed, connection lost: {}", err);
                let _ = events.send(Event::ConnectionLost {
                    cause: err.to_string(),
                });
                break;
            }
        }
    }

    state.store(LinkState::Closed as u8, Ordering::SeqCst);
}

/// Decode one chunk and deliver the event it carries, if any.
///
/// A decode failure discards the whole chunk and the connection stays up;
/// the consumer may drop the receiver at any time, so delivery failures
/// are ignored too.
fn dispatch(chunk: &[u8], events: &Sender<Event>) {
    match Message::decode(chunk) {
        Ok(message) => {
            trace!("decoded {:?}", message);
            let _ = events.send(message.into());
        }
        Err(err) => warn!("discarding {}-byte chunk: {}", chunk.len(), err),
    }
}

fn no_data(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut
    )
}
