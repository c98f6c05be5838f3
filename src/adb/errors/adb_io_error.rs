use std::fmt;

#[derive(Debug)]
pub enum AdbIoError {
    SocketError(String),
    CommunicationError(String),
    TimeoutError,
    ConnectionClosed(String),
}

impl fmt::Display for AdbIoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdbIoError::SocketError(msg) => write!(f, "{}", msg),
            AdbIoError::CommunicationError(msg) => write!(f, "{}", msg),
            AdbIoError::TimeoutError => write!(f, "Operation timed out"),
            AdbIoError::ConnectionClosed(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for AdbIoError {}
