use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;

use crate::adb::enums::host_status::HostStatus;
use crate::adb::errors::adb_client_error::{AdbClientError, ProtocolViolation};
use crate::adb::errors::adb_io_error::AdbIoError;
use crate::adb::io::socket::{read_exact, read_tag, read_with_timeout, send_bytes};
use crate::constants::OPTIONAL_LENGTH_WAIT_SECONDS;

pub fn encode_request(service: &str) -> Vec<u8> {
    format!("{:04x}{}", service.len(), service).into_bytes()
}

pub fn parse_hex_length(field: &[u8; 4]) -> Option<usize> {
    std::str::from_utf8(field)
        .ok()
        .and_then(|hex| usize::from_str_radix(hex, 16).ok())
}

pub async fn send_request(socket: &mut TcpStream, service: &str) -> Result<Vec<u8>, AdbClientError> {
    send_bytes(socket, &encode_request(service)).await?;

    let status = HostStatus::from_wire(read_tag(socket).await?)?;

    // Some host services answer with a bare status and hang up or go
    // quiet without a length field. An absent or unparsable length
    // degrades to an empty payload instead of a truncation error.
    let length = match read_optional_length(socket).await? {
        Some(length) => length,
        None => {
            return match status {
                HostStatus::Okay => Ok(Vec::new()),
                HostStatus::Fail => Err(AdbClientError::ServerFailure(Vec::new())),
            };
        }
    };

    let payload = read_exact(socket, length).await.map_err(|err| match err {
        AdbIoError::ConnectionClosed(_) => {
            AdbClientError::Protocol(ProtocolViolation::TruncatedPayload { expected: length })
        }
        other => AdbClientError::Io(other),
    })?;

    match status {
        HostStatus::Okay => Ok(payload),
        HostStatus::Fail => Err(AdbClientError::ServerFailure(payload)),
    }
}

async fn read_optional_length(socket: &mut TcpStream) -> Result<Option<usize>, AdbClientError> {
    let mut field = [0u8; 4];
    match read_with_timeout(socket.read_exact(&mut field), OPTIONAL_LENGTH_WAIT_SECONDS).await {
        Ok(_) => Ok(parse_hex_length(&field)),
        Err(AdbIoError::TimeoutError) => Ok(None),
        Err(AdbIoError::ConnectionClosed(_)) => Ok(None),
        Err(err) => Err(AdbClientError::Io(err)),
    }
}
