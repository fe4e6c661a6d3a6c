// Gateway trait for talking to the key reader
use crate::domain::event_log::LogEntry;
use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeviceError {
    #[error("request to device failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("device answered {endpoint} with status {status}")]
    Status {
        endpoint: &'static str,
        status: StatusCode,
    },

    #[error("device sent a malformed {endpoint} body: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

#[async_trait]
pub trait DeviceGateway: Send + Sync {
    /// Fetch the whole event log, in device order
    async fn fetch_log(&self) -> Result<Vec<LogEntry>, DeviceError>;

    /// Erase the stored WiFi credentials
    async fn delete_network(&self) -> Result<(), DeviceError>;

    /// Erase the event log
    async fn delete_data_log(&self) -> Result<(), DeviceError>;

    /// Store new WiFi credentials; the device restarts afterwards
    async fn save_network(&self, ssid: &str, password: &str) -> Result<(), DeviceError>;
}
