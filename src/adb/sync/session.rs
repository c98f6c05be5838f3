use tokio::net::TcpStream;

use crate::adb::errors::adb_client_error::AdbClientError;
use crate::adb::errors::adb_io_error::AdbIoError;
use crate::adb::io::socket::{read_exact, read_u32_le};
use crate::adb::models::file_entry::FileEntry;
use crate::adb::sync::codec;
use crate::constants::{DENT_RECORD_SIZE, MAX_FAIL_MESSAGE_SIZE};

pub async fn read_dent_entry(socket: &mut TcpStream) -> Result<FileEntry, AdbClientError> {
    let record_bytes = read_exact(socket, DENT_RECORD_SIZE).await?;
    let record = codec::decode_dent_record(&record_bytes)?;

    let name_bytes = read_exact(socket, record.namelen as usize).await?;
    let name = String::from_utf8_lossy(&name_bytes).into_owned();

    Ok(FileEntry::new(name, record.mode, record.size, record.mtime))
}

pub async fn read_failure_message(socket: &mut TcpStream) -> Result<Vec<u8>, AdbIoError> {
    let length = read_u32_le(socket).await? as usize;
    read_exact(socket, length.min(MAX_FAIL_MESSAGE_SIZE)).await
}

// DONE and the final OKAY carry a fixed trailer the client has no use
// for; a server that hangs up without sending it is tolerated.
pub async fn discard_trailer(socket: &mut TcpStream, size: usize) {
    let _ = read_exact(socket, size).await;
}
