use std::path::PathBuf;

use serde::Deserialize;
use tracing::{error, info};

use crate::constants::{
    CLIENT_DIR, CONNECT_TIMEOUT_SECONDS, DEFAULT_ADB_SERVER_PORT, DEFAULT_PROBE_INTERVAL_MS,
    LOCAL_IP,
};

const CONFIG_FILE: &str = "client.yml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub server_address: String,
    pub server_port: u16,
    pub probe_interval_ms: u64,
    pub connect_timeout_s: f64,
    pub cache_dir: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            server_address: String::from(LOCAL_IP),
            server_port: DEFAULT_ADB_SERVER_PORT,
            probe_interval_ms: DEFAULT_PROBE_INTERVAL_MS,
            connect_timeout_s: CONNECT_TIMEOUT_SECONDS,
            cache_dir: None,
        }
    }
}

impl ClientConfig {
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let config_path = dirs::config_dir()
            .ok_or("Failed to get config directory")?
            .join(CLIENT_DIR)
            .join(CONFIG_FILE);

        info!("Loading client config from: {:?}", config_path);

        let contents = match std::fs::read_to_string(&config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("No config file found, using default configuration");
                return Ok(Self::default());
            }
            Err(e) => {
                error!("Failed to read config file: {}", e);
                return Err(e.into());
            }
        };

        let config: ClientConfig = serde_yaml::from_str(&contents)
            .map_err(|e| {
                error!("Failed to parse config file: {}", e);
                e
            })?;

        Ok(config)
    }
}
