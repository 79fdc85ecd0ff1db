//! Requests that can be sent to the companion daemon.

use crate::constants::*;

/// Whether a command reads or writes the attribute it names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Read the attribute.
    Get,
    /// Write the attribute.
    Set,
}

impl From<Action> for u8 {
    fn from(action: Action) -> u8 {
        match action {
            Action::Get => ACTION_GET,
            Action::Set => ACTION_SET,
        }
    }
}

/// Requests the client can issue to the daemon.
///
/// The daemon defines no acknowledgement or correlation between a request
/// and a later message; replies arrive asynchronously as
/// [`Message`](crate::Message)s identified by kind alone. The daemon never
/// answers `Name` on the socket at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Request the device name.
    Name,
    /// Request the battery level.
    Battery,
    /// Request a one-shot heart-rate measurement.
    Heartrate,
    /// Enable or disable continuous heart-rate streaming.
    HeartrateContinuous {
        /// True to start streaming, false to stop. The daemon treats any
        /// nonzero flag byte as enable.
        enable: bool,
    },
    /// Request the step count.
    Steps,
}

impl Command {
    /// Get the command code for this command.
    pub fn code(&self) -> u8 {
        match self {
            Command::Name => CMD_NAME,
            Command::Battery => CMD_BATTERY,
            Command::Heartrate => CMD_HEARTRATE,
            Command::HeartrateContinuous { .. } => CMD_HEARTRATE_CONTINUOUS,
            Command::Steps => CMD_STEPS,
        }
    }

    /// Get the action qualifying this command's intent.
    pub fn action(&self) -> Action {
        match self {
            Command::HeartrateContinuous { .. } => Action::Set,
            _ => Action::Get,
        }
    }

    /// Encode the command as a complete request frame.
    ///
    /// Frame layout: `"CMD"` + command byte + action byte + payload. The
    /// frame must reach the transport in a single write; the protocol has
    /// no way to resume a partial frame.
    pub fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(REQUEST_HEADER_SIZE + 1);
        buf.extend_from_slice(&CMD_MAGIC);
        buf.push(self.code());
        buf.push(self.action().into());

        if let Command::HeartrateContinuous { enable } = self {
            buf.push(if *enable { 1 } else { 0 });
        }

        buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_commands_encode_as_bare_headers() {
        assert_eq!(Command::Name.encode(), [b'C', b'M', b'D', 244, 0]);
        assert_eq!(Command::Battery.encode(), [b'C', b'M', b'D', 83, 0]);
        assert_eq!(Command::Heartrate.encode(), [b'C', b'M', b'D', 139, 0]);
        assert_eq!(Command::Steps.encode(), [b'C', b'M', b'D', 80, 0]);
    }

    #[test]
    fn test_continuous_heartrate_encodes_set_with_flag() {
        let enable = Command::HeartrateContinuous { enable: true };
        assert_eq!(enable.encode(), [b'C', b'M', b'D', 173, 1, 1]);

        let disable = Command::HeartrateContinuous { enable: false };
        assert_eq!(disable.encode(), [b'C', b'M', b'D', 173, 1, 0]);
    }

    #[test]
    fn test_only_continuous_heartrate_is_a_set() {
        let commands = [
            Command::Name,
            Command::Battery,
            Command::Heartrate,
            Command::Steps,
        ];
        for command in commands {
            assert_eq!(command.action(), Action::Get);
            assert_eq!(command.encode().len(), REQUEST_HEADER_SIZE);
        }

        let continuous = Command::HeartrateContinuous { enable: true };
        assert_eq!(continuous.action(), Action::Set);
    }
}
