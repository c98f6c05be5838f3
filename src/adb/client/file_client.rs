use tracing::warn;

use crate::adb::enums::sync_response::SyncResponse;
use crate::adb::errors::adb_client_error::AdbClientError;
use crate::adb::io::socket::{read_exact, read_tag, send_bytes};
use crate::adb::models::file_entry::FileEntry;
use crate::adb::sync::codec;
use crate::adb::sync::session::{discard_trailer, read_dent_entry, read_failure_message};
use crate::config::ClientConfig;
use crate::constants::{
    DENT_RECORD_SIZE, HOST_GET_STATE_COMMAND, HOST_VERSION_COMMAND, STAT_RECORD_SIZE,
    SYNC_LIST_COMMAND, SYNC_STAT_COMMAND,
};
use crate::transport::server_connection::ServerConnection;
use crate::utils::utils::{last_path_segment, normalize_list_path};

/// Client for the adb server's host protocol and `sync:` file-transfer
/// sub-protocol. Every operation opens its own connection; nothing is
/// shared or pooled, so a client can be used from concurrent tasks.
pub struct AdbFileClient {
    config: ClientConfig,
}

impl AdbFileClient {
    pub fn new() -> Self {
        AdbFileClient { config: ClientConfig::default() }
    }

    pub fn with_config(config: ClientConfig) -> Self {
        AdbFileClient { config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub async fn host_version(&self) -> Result<String, AdbClientError> {
        let mut connection = ServerConnection::open_with_config(&self.config).await?;
        let payload = connection.host_request(HOST_VERSION_COMMAND).await?;
        Ok(String::from_utf8_lossy(&payload).into_owned())
    }

    pub async fn device_state(&self) -> Result<String, AdbClientError> {
        let mut connection = ServerConnection::open_with_config(&self.config).await?;
        let payload = connection.host_request(HOST_GET_STATE_COMMAND).await?;
        Ok(String::from_utf8_lossy(&payload).into_owned())
    }

    pub(crate) async fn open_sync_session(&self) -> Result<ServerConnection, AdbClientError> {
        let mut connection = ServerConnection::open_with_config(&self.config).await?;
        connection.select_transport_any().await?;
        connection.start_sync_mode().await?;
        Ok(connection)
    }

    pub async fn stat(&self, path: &str) -> Result<Option<FileEntry>, AdbClientError> {
        let mut connection = self.open_sync_session().await?;
        let socket = connection.socket_mut();

        send_bytes(socket, &codec::encode_sync_request(SYNC_STAT_COMMAND, path)).await?;

        let tag = read_tag(socket).await?;
        match SyncResponse::from_wire(tag) {
            Ok(SyncResponse::Stat) => {
                let record_bytes = read_exact(socket, STAT_RECORD_SIZE).await?;
                let record = codec::decode_stat_record(&record_bytes)?;
                let name = last_path_segment(path).to_string();
                Ok(Some(FileEntry::new(name, record.mode, record.size, record.mtime)))
            }
            Ok(SyncResponse::Fail) => {
                let message = read_failure_message(socket).await?;
                warn!("stat {} failed: {}", path, String::from_utf8_lossy(&message));
                Ok(None)
            }
            Ok(other) => {
                warn!("Unexpected {} response to STAT request for {}", other, path);
                Ok(None)
            }
            Err(violation) => {
                warn!("Invalid response to STAT request for {}: {}", path, violation);
                Ok(None)
            }
        }
    }

    /// Lists a remote directory, dropping the `.` and `..` entries the
    /// raw protocol reports.
    pub async fn list(&self, path: &str) -> Result<Vec<FileEntry>, AdbClientError> {
        let entries = self.list_raw(path).await?;
        Ok(entries
            .into_iter()
            .filter(|entry| entry.name() != "." && entry.name() != "..")
            .collect())
    }

    // Raw DENT loop. Mid-stream failures are not fatal: whatever was
    // collected before the stream went bad is still useful to callers,
    // so this degrades to a partial listing instead of an error.
    pub(crate) async fn list_raw(&self, path: &str) -> Result<Vec<FileEntry>, AdbClientError> {
        let directory = normalize_list_path(path);
        let mut connection = self.open_sync_session().await?;
        let socket = connection.socket_mut();

        send_bytes(socket, &codec::encode_sync_request(SYNC_LIST_COMMAND, &directory)).await?;

        let mut entries = Vec::new();
        loop {
            let tag = match read_tag(socket).await {
                Ok(tag) => tag,
                Err(err) => {
                    warn!("Listing {} ended early: {}", directory, err);
                    return Ok(entries);
                }
            };

            match SyncResponse::from_wire(tag) {
                Ok(SyncResponse::Dent) => match read_dent_entry(socket).await {
                    Ok(entry) => entries.push(entry),
                    Err(err) => {
                        warn!("Truncated directory entry in {}: {}", directory, err);
                        return Ok(entries);
                    }
                },
                Ok(SyncResponse::Done) => {
                    discard_trailer(socket, DENT_RECORD_SIZE).await;
                    break;
                }
                Ok(SyncResponse::Fail) => {
                    match read_failure_message(socket).await {
                        Ok(message) => warn!(
                            "Listing {} failed: {}",
                            directory,
                            String::from_utf8_lossy(&message)
                        ),
                        Err(err) => warn!("Listing {} failed, unreadable message: {}", directory, err),
                    }
                    return Ok(entries);
                }
                Ok(other) => {
                    warn!("Unexpected {} response while listing {}", other, directory);
                    return Ok(entries);
                }
                Err(violation) => {
                    warn!("Invalid response while listing {}: {}", directory, violation);
                    return Ok(entries);
                }
            }
        }

        Ok(entries)
    }
}

impl Default for AdbFileClient {
    fn default() -> Self {
        Self::new()
    }
}
