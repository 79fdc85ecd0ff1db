//! Events delivered to the consumer.

use wristlink_protocol::Message;

/// Telemetry events delivered to the subscriber.
///
/// The only artifact that crosses from the background read loop into the
/// consumer. Events arrive in per-connection FIFO order; the stream is
/// terminated by exactly one [`Event::ConnectionLost`], after which no
/// further events are produced for that connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Battery level report.
    Battery(u8),
    /// Heart-rate report in beats per minute.
    Heartrate(u8),
    /// Step-count report.
    Steps(u32),
    /// The connection is gone. Terminal; the event channel disconnects
    /// after this.
    ConnectionLost {
        /// Description of the read failure or close.
        cause: String,
    },
}

impl From<Message> for Event {
    fn from(message: Message) -> Event {
        match message {
            Message::Battery(level) => Event::Battery(level),
            Message::Heartrate(bpm) => Event::Heartrate(bpm),
            Message::Steps(count) => Event::Steps(count),
        }
    }
}
