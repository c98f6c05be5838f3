use std::io::ErrorKind;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::timeout;

use crate::adb::errors::adb_io_error::AdbIoError;

pub async fn send_bytes(socket: &mut TcpStream, data: &[u8]) -> Result<(), AdbIoError> {
    socket.write_all(data).await.map_err(|err| AdbIoError::SocketError(err.to_string()))
}

pub async fn read_exact(socket: &mut TcpStream, len: usize) -> Result<Vec<u8>, AdbIoError> {
    let mut buf = vec![0u8; len];
    match socket.read_exact(&mut buf).await {
        Ok(_) => Ok(buf),
        Err(e) => {
            if e.kind() == ErrorKind::UnexpectedEof {
                Err(AdbIoError::ConnectionClosed("Connection closed by peer".to_string()))
            } else {
                Err(AdbIoError::CommunicationError(format!("Failed to read exact bytes: {}", e)))
            }
        }
    }
}

pub async fn read_tag(socket: &mut TcpStream) -> Result<[u8; 4], AdbIoError> {
    let mut tag = [0u8; 4];
    match socket.read_exact(&mut tag).await {
        Ok(_) => Ok(tag),
        Err(e) => {
            if e.kind() == ErrorKind::UnexpectedEof {
                Err(AdbIoError::ConnectionClosed("Connection closed by peer".to_string()))
            } else {
                Err(AdbIoError::CommunicationError(format!("Failed to read response tag: {}", e)))
            }
        }
    }
}

pub async fn read_u32_le(socket: &mut TcpStream) -> Result<u32, AdbIoError> {
    let mut buf = [0u8; 4];
    socket.read_exact(&mut buf).await
        .map_err(|e| AdbIoError::CommunicationError(format!("Failed to read u32: {}", e)))?;
    Ok(u32::from_le_bytes(buf))
}

pub async fn read_with_timeout<F, T>(operation: F, wait_s: f64) -> Result<T, AdbIoError>
    where
        F: std::future::Future<Output = std::io::Result<T>>,
{
    match timeout(Duration::from_secs_f64(wait_s), operation).await {
        Ok(Ok(result)) => Ok(result),
        Ok(Err(err)) => {
            if err.kind() == ErrorKind::UnexpectedEof {
                Err(AdbIoError::ConnectionClosed("Connection closed unexpectedly".to_string()))
            } else {
                Err(AdbIoError::CommunicationError(err.to_string()))
            }
        }
        Err(_) => Err(AdbIoError::TimeoutError),
    }
}

pub async fn read_tag_with_wait(socket: &mut TcpStream, wait_s: f64) -> Result<Option<[u8; 4]>, AdbIoError> {
    let mut tag = [0u8; 4];
    match read_with_timeout(socket.read_exact(&mut tag), wait_s).await {
        Ok(_) => Ok(Some(tag)),
        Err(AdbIoError::TimeoutError) => Ok(None),
        Err(err) => Err(err),
    }
}

pub async fn poll_tag_nowait(socket: &mut TcpStream) -> Result<Option<[u8; 4]>, AdbIoError> {
    let mut tag = [0u8; 4];
    match socket.try_read(&mut tag) {
        Ok(0) => Err(AdbIoError::ConnectionClosed("Connection closed by peer".to_string())),
        Ok(read) if read < tag.len() => {
            // The rest of the tag is already in flight.
            socket.read_exact(&mut tag[read..]).await
                .map_err(|e| AdbIoError::CommunicationError(format!("Failed to read response tag: {}", e)))?;
            Ok(Some(tag))
        }
        Ok(_) => Ok(Some(tag)),
        Err(err) if err.kind() == ErrorKind::WouldBlock => Ok(None),
        Err(err) => Err(AdbIoError::SocketError(err.to_string())),
    }
}
