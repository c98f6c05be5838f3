use std::time::Duration;

use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::debug;

use crate::adb::errors::adb_client_error::AdbClientError;
use crate::adb::errors::adb_io_error::AdbIoError;
use crate::adb::host::framing;
use crate::config::ClientConfig;
use crate::constants::{HOST_TRANSPORT_ANY_COMMAND, SYNC_COMMAND};

// One TCP connection to the adb server, good for exactly one logical
// operation. Dropping it closes the socket.
pub struct ServerConnection {
    socket: TcpStream,
}

impl ServerConnection {
    pub async fn open(address: &str, port: u16, connect_timeout_s: f64) -> Result<Self, AdbIoError> {
        let endpoint = format!("{}:{}", address, port);

        match timeout(Duration::from_secs_f64(connect_timeout_s), TcpStream::connect(&endpoint)).await {
            Ok(Ok(socket)) => {
                debug!("Connected to adb server at {}", endpoint);
                Ok(ServerConnection { socket })
            }
            Ok(Err(err)) => {
                Err(AdbIoError::SocketError(format!("Failed to connect to {}: {}", endpoint, err)))
            }
            Err(_) => Err(AdbIoError::TimeoutError),
        }
    }

    pub async fn open_with_config(config: &ClientConfig) -> Result<Self, AdbIoError> {
        Self::open(&config.server_address, config.server_port, config.connect_timeout_s).await
    }

    pub fn socket_mut(&mut self) -> &mut TcpStream {
        &mut self.socket
    }

    pub async fn host_request(&mut self, service: &str) -> Result<Vec<u8>, AdbClientError> {
        framing::send_request(&mut self.socket, service).await
    }

    pub async fn select_transport_any(&mut self) -> Result<(), AdbClientError> {
        self.host_request(HOST_TRANSPORT_ANY_COMMAND).await.map(|_| ())
    }

    pub async fn start_sync_mode(&mut self) -> Result<(), AdbClientError> {
        self.host_request(SYNC_COMMAND).await.map(|_| ())
    }
}
