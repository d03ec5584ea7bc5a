use std::fmt::{self, Display};

/// Process-wide connection state, owned by the transport and read by the
/// command layer before any connect dispatch.
///
/// A new connection attempt may start only from `Disconnected`; every other
/// state rejects the attempt before anything else runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionStatus {
    Disconnected,
    Connecting,
    Connected,
    Disconnecting,
    Undefined,
}

impl ConnectionStatus {
    /// True only in the one state from which a connect attempt may start.
    pub fn is_idle(self) -> bool {
        matches!(self, ConnectionStatus::Disconnected)
    }
}

impl Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ConnectionStatus::Disconnected => "disconnected",
            ConnectionStatus::Connecting => "connecting",
            ConnectionStatus::Connected => "connected",
            ConnectionStatus::Disconnecting => "disconnecting",
            ConnectionStatus::Undefined => "undefined",
        };
        write!(f, "{}", label)
    }
}
