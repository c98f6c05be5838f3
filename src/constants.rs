pub const LOCAL_IP: &str = "127.0.0.1";

pub const DEFAULT_ADB_SERVER_PORT: u16 = 5037;

pub const OKAY: &str = "OKAY";
pub const FAIL: &str = "FAIL";
pub const B_OKAY: &[u8] = b"OKAY";
pub const B_FAIL: &[u8] = b"FAIL";

pub const MAX_ADB_DATA: u32 = 1024 * 1024;

pub const HOST_TRANSPORT_ANY_COMMAND: &str = "host:transport-any";
pub const HOST_GET_STATE_COMMAND: &str = "host:get-state";
pub const HOST_VERSION_COMMAND: &str = "host:version";

pub const DEVICE_STATE: &str = "device";

pub const SYNC_COMMAND: &str = "sync:";

pub const SYNC_SEND_COMMAND: &[u8] = b"SEND";
pub const SYNC_DATA_COMMAND: &[u8] = b"DATA";
pub const SYNC_DONE_COMMAND: &[u8] = b"DONE";
pub const SYNC_STAT_COMMAND: &[u8] = b"STAT";
pub const SYNC_RECV_COMMAND: &[u8] = b"RECV";
pub const SYNC_LIST_COMMAND: &[u8] = b"LIST";
pub const SYNC_DENT_COMMAND: &[u8] = b"DENT";

pub const DENT_RECORD_SIZE: usize = 16;
pub const STAT_RECORD_SIZE: usize = 12;
pub const DONE_TRAILER_SIZE: usize = 4;

pub const MAX_DENT_NAME_LENGTH: u32 = 4096;
pub const MAX_FAIL_MESSAGE_SIZE: usize = 64 * 1024;

pub const PUSH_CHUNK_SIZE: usize = 32 * 1024;

pub const CONNECT_TIMEOUT_SECONDS: f64 = 1.0;
pub const OPTIONAL_LENGTH_WAIT_SECONDS: f64 = 0.1;
pub const PUSH_FAIL_PROBE_SECONDS: f64 = 0.1;

pub const DEFAULT_PROBE_INTERVAL_MS: u64 = 1000;

pub const CLIENT_DIR: &str = "adbf-client";
pub const PULLED_FILES_DIR: &str = "PulledFiles";
