use std::io::ErrorKind;

use once_cell::sync::OnceCell;
use tempfile::Builder;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, Registry};

static LOG_DIR: OnceCell<tempfile::TempDir> = OnceCell::new();
const CLIENT_LOG_PREFIX: &str = "adbf-client-";
const RANDOM_BYTES_LENGTH: usize = 5;
const LOG_FILE_NAME: &str = "adbf";

pub fn init() -> std::io::Result<()> {
    LOG_DIR.get_or_try_init(|| {
        Builder::new()
            .prefix(CLIENT_LOG_PREFIX)
            .rand_bytes(RANDOM_BYTES_LENGTH)
            .tempdir_in(std::env::temp_dir())
    })?;

    let file_appender = RollingFileAppender::new(
        Rotation::DAILY,
        log_dir(),
        LOG_FILE_NAME,
    );

    let subscriber = Registry::default()
        .with(fmt::layer().with_ansi(false).with_writer(file_appender));

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|err| std::io::Error::new(ErrorKind::AlreadyExists, err.to_string()))
}

pub fn log_dir() -> &'static std::path::Path {
    LOG_DIR.get()
        .expect("Log directory not initialized")
        .path()
}
