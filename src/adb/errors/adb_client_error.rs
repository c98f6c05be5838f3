use std::fmt;

use crate::adb::errors::adb_io_error::AdbIoError;

#[derive(Debug)]
pub enum ProtocolViolation {
    InvalidStatus([u8; 4]),
    InvalidLength(u32),
    TruncatedPayload { expected: usize },
    UnexpectedResponse([u8; 4]),
}

impl fmt::Display for ProtocolViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolViolation::InvalidStatus(tag) => {
                write!(f, "invalid status tag \"{}\"", tag.escape_ascii())
            }
            ProtocolViolation::InvalidLength(length) => {
                write!(f, "implausible length field: {}", length)
            }
            ProtocolViolation::TruncatedPayload { expected } => {
                write!(f, "truncated payload, expected {} bytes", expected)
            }
            ProtocolViolation::UnexpectedResponse(tag) => {
                write!(f, "unexpected response tag \"{}\"", tag.escape_ascii())
            }
        }
    }
}

#[derive(Debug)]
pub enum AdbClientError {
    Io(AdbIoError),
    ServerFailure(Vec<u8>),
    Protocol(ProtocolViolation),
    InvalidRequest(String),
    LocalIo(String),
}

impl AdbClientError {
    pub fn server_message(&self) -> Option<String> {
        match self {
            AdbClientError::ServerFailure(message) => {
                Some(String::from_utf8_lossy(message).into_owned())
            }
            _ => None,
        }
    }
}

impl fmt::Display for AdbClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdbClientError::Io(err) => write!(f, "Communication failed: {}", err),
            AdbClientError::ServerFailure(message) => {
                write!(f, "Server reported failure: {}", String::from_utf8_lossy(message))
            }
            AdbClientError::Protocol(violation) => write!(f, "Protocol violation: {}", violation),
            AdbClientError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
            AdbClientError::LocalIo(msg) => write!(f, "Local file operation failed: {}", msg),
        }
    }
}

impl std::error::Error for AdbClientError {}

impl From<AdbIoError> for AdbClientError {
    fn from(err: AdbIoError) -> Self {
        AdbClientError::Io(err)
    }
}

impl From<ProtocolViolation> for AdbClientError {
    fn from(violation: ProtocolViolation) -> Self {
        AdbClientError::Protocol(violation)
    }
}
