pub mod adb_client_error;
pub mod adb_io_error;
