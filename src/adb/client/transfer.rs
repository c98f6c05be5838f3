use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::{info, warn};

use crate::adb::client::file_client::AdbFileClient;
use crate::adb::enums::sync_response::SyncResponse;
use crate::adb::errors::adb_client_error::{AdbClientError, ProtocolViolation};
use crate::adb::io::socket::{
    poll_tag_nowait, read_exact, read_tag, read_tag_with_wait, read_u32_le, send_bytes,
};
use crate::adb::sync::codec;
use crate::adb::sync::session::{discard_trailer, read_failure_message};
use crate::constants::{
    CLIENT_DIR, DONE_TRAILER_SIZE, MAX_ADB_DATA, PULLED_FILES_DIR, PUSH_CHUNK_SIZE,
    PUSH_FAIL_PROBE_SECONDS, SYNC_RECV_COMMAND, SYNC_SEND_COMMAND,
};
use crate::utils::utils::last_path_segment;

impl AdbFileClient {
    pub fn pulled_files_dir(&self) -> PathBuf {
        match &self.config().cache_dir {
            Some(dir) => dir.join(PULLED_FILES_DIR),
            None => dirs::cache_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join(CLIENT_DIR)
                .join(PULLED_FILES_DIR),
        }
    }

    /// Downloads a remote file into the pulled-files cache and returns
    /// the local path. A rejected or interrupted transfer cleans up the
    /// partial file and yields `None`.
    pub async fn pull(&self, path: &str) -> Result<Option<PathBuf>, AdbClientError> {
        let destination_dir = self.pulled_files_dir();
        tokio::fs::create_dir_all(&destination_dir).await.map_err(|err| {
            AdbClientError::LocalIo(format!(
                "Failed to create {}: {}",
                destination_dir.display(),
                err
            ))
        })?;
        let destination = destination_dir.join(last_path_segment(path));

        let mut connection = self.open_sync_session().await?;
        let socket = connection.socket_mut();

        send_bytes(socket, &codec::encode_sync_request(SYNC_RECV_COMMAND, path)).await?;

        let mut file = tokio::fs::File::create(&destination).await.map_err(|err| {
            AdbClientError::LocalIo(format!("Failed to create {}: {}", destination.display(), err))
        })?;

        loop {
            let tag = match read_tag(socket).await {
                Ok(tag) => tag,
                Err(err) => {
                    discard_partial(file, &destination).await;
                    return Err(err.into());
                }
            };

            match SyncResponse::from_wire(tag) {
                Ok(SyncResponse::Data) => {
                    let size = match read_u32_le(socket).await {
                        Ok(size) => size,
                        Err(err) => {
                            discard_partial(file, &destination).await;
                            return Err(err.into());
                        }
                    };
                    if size > MAX_ADB_DATA {
                        warn!("Pull of {} advertised a {} byte chunk", path, size);
                        discard_partial(file, &destination).await;
                        return Ok(None);
                    }
                    // read_exact keeps resuming across partial socket
                    // reads until the declared size is accumulated.
                    let chunk = match read_exact(socket, size as usize).await {
                        Ok(chunk) => chunk,
                        Err(err) => {
                            warn!("Pull of {} cut short mid-chunk: {}", path, err);
                            discard_partial(file, &destination).await;
                            return Ok(None);
                        }
                    };
                    if let Err(err) = file.write_all(&chunk).await {
                        discard_partial(file, &destination).await;
                        return Err(AdbClientError::LocalIo(format!(
                            "Failed to write {}: {}",
                            destination.display(),
                            err
                        )));
                    }
                }
                Ok(SyncResponse::Done) => {
                    discard_trailer(socket, DONE_TRAILER_SIZE).await;
                    break;
                }
                Ok(SyncResponse::Fail) => {
                    match read_failure_message(socket).await {
                        Ok(message) => warn!(
                            "Pull of {} failed: {}",
                            path,
                            String::from_utf8_lossy(&message)
                        ),
                        Err(err) => warn!("Pull of {} failed, unreadable message: {}", path, err),
                    }
                    discard_partial(file, &destination).await;
                    return Ok(None);
                }
                Ok(other) => {
                    warn!("Unexpected {} response while pulling {}", other, path);
                    discard_partial(file, &destination).await;
                    return Ok(None);
                }
                Err(violation) => {
                    warn!("Invalid response while pulling {}: {}", path, violation);
                    discard_partial(file, &destination).await;
                    return Ok(None);
                }
            }
        }

        if let Err(err) = file.flush().await {
            discard_partial(file, &destination).await;
            return Err(AdbClientError::LocalIo(format!(
                "Failed to flush {}: {}",
                destination.display(),
                err
            )));
        }

        info!("Pulled {} to {}", path, destination.display());
        Ok(Some(destination))
    }

    /// Uploads a local file to `device_path` with the given POSIX mode.
    /// The target must name a file, not a directory.
    pub async fn push(&self, local_path: &Path, device_path: &str, mode: u32) -> Result<(), AdbClientError> {
        // Validated before any network I/O.
        if device_path.is_empty() || device_path.ends_with('/') {
            return Err(AdbClientError::InvalidRequest(format!(
                "Device path must name a file: {:?}",
                device_path
            )));
        }

        let metadata = tokio::fs::metadata(local_path).await.map_err(|err| {
            AdbClientError::InvalidRequest(format!(
                "Local file {} is not readable: {}",
                local_path.display(),
                err
            ))
        })?;
        if !metadata.is_file() {
            return Err(AdbClientError::InvalidRequest(format!(
                "{} is not a regular file",
                local_path.display()
            )));
        }
        let mtime = metadata
            .modified()
            .ok()
            .and_then(|modified| modified.duration_since(UNIX_EPOCH).ok())
            .map(|elapsed| elapsed.as_secs() as u32)
            .unwrap_or(0);

        let mut source = tokio::fs::File::open(local_path).await.map_err(|err| {
            AdbClientError::LocalIo(format!("Failed to open {}: {}", local_path.display(), err))
        })?;

        let mut connection = self.open_sync_session().await?;
        let socket = connection.socket_mut();

        let argument = format!("{},{:o}", device_path, mode);
        send_bytes(socket, &codec::encode_sync_request(SYNC_SEND_COMMAND, &argument)).await?;

        // The server only speaks up at this point to reject the target;
        // silence within the probe window is the common case.
        if let Some(tag) = read_tag_with_wait(socket, PUSH_FAIL_PROBE_SECONDS).await? {
            return Err(read_push_failure(socket, tag).await);
        }

        let mut chunk = vec![0u8; PUSH_CHUNK_SIZE];
        loop {
            let read = source.read(&mut chunk).await.map_err(|err| {
                AdbClientError::LocalIo(format!("Failed to read {}: {}", local_path.display(), err))
            })?;
            if read == 0 {
                break;
            }

            send_bytes(socket, &codec::encode_data_header(read as u32)).await?;
            send_bytes(socket, &chunk[..read]).await?;

            // Zero-wait poll so a mid-upload rejection aborts the
            // transfer instead of wasting the remaining chunks.
            if let Some(tag) = poll_tag_nowait(socket).await? {
                warn!("Push to {} rejected mid-stream", device_path);
                return Err(read_push_failure(socket, tag).await);
            }
        }

        send_bytes(socket, &codec::encode_done(mtime)).await?;

        let tag = read_tag(socket).await?;
        match SyncResponse::from_wire(tag) {
            Ok(SyncResponse::Okay) => {
                discard_trailer(socket, DONE_TRAILER_SIZE).await;
                info!("Pushed {} to {}", local_path.display(), device_path);
                Ok(())
            }
            Ok(SyncResponse::Fail) => match read_failure_message(socket).await {
                Ok(message) => Err(AdbClientError::ServerFailure(message)),
                Err(err) => Err(err.into()),
            },
            Ok(_) => Err(AdbClientError::Protocol(ProtocolViolation::UnexpectedResponse(tag))),
            Err(violation) => Err(violation.into()),
        }
    }
}

async fn discard_partial(file: tokio::fs::File, destination: &Path) {
    drop(file);
    if let Err(err) = tokio::fs::remove_file(destination).await {
        if err.kind() != std::io::ErrorKind::NotFound {
            warn!("Failed to remove partial file {}: {}", destination.display(), err);
        }
    }
}

async fn read_push_failure(socket: &mut TcpStream, tag: [u8; 4]) -> AdbClientError {
    match SyncResponse::from_wire(tag) {
        Ok(SyncResponse::Fail) => match read_failure_message(socket).await {
            Ok(message) => AdbClientError::ServerFailure(message),
            Err(err) => err.into(),
        },
        Ok(_) => AdbClientError::Protocol(ProtocolViolation::UnexpectedResponse(tag)),
        Err(violation) => violation.into(),
    }
}
