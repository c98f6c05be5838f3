//! Client for the adb server's host protocol and `sync:` file-transfer
//! sub-protocol over local TCP.

pub mod adb;
pub mod config;
pub mod constants;
pub mod logging;
pub mod probe;
pub mod transport;
pub mod utils;

pub use adb::client::file_client::AdbFileClient;
pub use adb::errors::adb_client_error::{AdbClientError, ProtocolViolation};
pub use adb::errors::adb_io_error::AdbIoError;
pub use adb::models::file_entry::FileEntry;
pub use config::ClientConfig;
pub use probe::device_probe::{DeviceProbe, ProbeState};
