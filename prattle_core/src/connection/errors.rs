use std::fmt::{self, Display};

/// A central error enum for connection-related errors.
#[derive(Debug)]
pub enum ConnectionError {
    Io(std::io::Error),
    Other(String),
}

/// Convert from std::io::Error.
impl From<std::io::Error> for ConnectionError {
    fn from(err: std::io::Error) -> ConnectionError {
        ConnectionError::Io(err)
    }
}

impl Display for ConnectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionError::Io(e) => write!(f, "I/O error: {}", e),
            ConnectionError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ConnectionError {}
