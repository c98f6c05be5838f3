use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::interval;
use tracing::{debug, info};

use crate::config::ClientConfig;
use crate::constants::{DEVICE_STATE, HOST_GET_STATE_COMMAND};
use crate::transport::server_connection::ServerConnection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeState {
    Searching,
    Found,
}

// Periodic `host:get-state` poll. The probe is a one-shot discovery
// signal: once a device answers, the timer stops and the state never
// goes back to Searching. Callers wanting to re-probe start a new one.
pub struct DeviceProbe {
    state_rx: watch::Receiver<ProbeState>,
    probe_task: JoinHandle<()>,
}

impl DeviceProbe {
    pub fn start(config: ClientConfig) -> Self {
        let (state_tx, state_rx) = watch::channel(ProbeState::Searching);

        let probe_task = tokio::spawn(async move {
            // The first tick completes immediately, so discovery is not
            // delayed by a full interval after construction.
            let mut ticker = interval(Duration::from_millis(config.probe_interval_ms.max(1)));
            loop {
                ticker.tick().await;
                if probe_once(&config).await {
                    info!("Device found");
                    let _ = state_tx.send(ProbeState::Found);
                    break;
                }
            }
        });

        DeviceProbe { state_rx, probe_task }
    }

    pub fn state(&self) -> ProbeState {
        *self.state_rx.borrow()
    }

    // Resolves true once a device has been discovered, false if the
    // probe was stopped first.
    pub async fn device_found(&mut self) -> bool {
        loop {
            if *self.state_rx.borrow_and_update() == ProbeState::Found {
                return true;
            }
            if self.state_rx.changed().await.is_err() {
                return *self.state_rx.borrow() == ProbeState::Found;
            }
        }
    }

    pub fn stop(&self) {
        self.probe_task.abort();
    }
}

impl Drop for DeviceProbe {
    fn drop(&mut self) {
        self.probe_task.abort();
    }
}

async fn probe_once(config: &ClientConfig) -> bool {
    let mut connection = match ServerConnection::open_with_config(config).await {
        Ok(connection) => connection,
        Err(err) => {
            debug!("Probe could not reach adb server: {}", err);
            return false;
        }
    };

    match connection.host_request(HOST_GET_STATE_COMMAND).await {
        Ok(payload) => payload == DEVICE_STATE.as_bytes(),
        Err(err) => {
            debug!("get-state request failed: {}", err);
            false
        }
    }
}
