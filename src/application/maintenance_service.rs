// Maintenance service - Destructive device resets triggered from the dashboard
use crate::application::device_gateway::DeviceGateway;
use serde::Deserialize;
use std::sync::Arc;

/// What the browser should do once an action has been handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Reload,
    Stay,
}

/// When clearing the event log reloads the page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogResetReload {
    /// Reload straight after dispatching the request, without waiting for it
    Immediate,
    /// Wait for the request, then reload whatever the outcome
    #[default]
    AfterCompletion,
    /// Reload only when the device confirmed the reset
    OnSuccess,
}

#[derive(Clone)]
pub struct MaintenanceService {
    gateway: Arc<dyn DeviceGateway>,
    log_reset_reload: LogResetReload,
}

impl MaintenanceService {
    pub fn new(gateway: Arc<dyn DeviceGateway>, log_reset_reload: LogResetReload) -> Self {
        Self {
            gateway,
            log_reset_reload,
        }
    }

    pub async fn reset_network(&self) -> Navigation {
        match self.gateway.delete_network().await {
            Ok(()) => {
                tracing::info!("Network settings deleted");
                Navigation::Reload
            }
            Err(e) => {
                tracing::error!("Error deleting network settings: {}", e);
                Navigation::Stay
            }
        }
    }

    pub async fn reset_event_log(&self) -> Navigation {
        match self.log_reset_reload {
            LogResetReload::Immediate => {
                let gateway = self.gateway.clone();
                tokio::spawn(async move {
                    match gateway.delete_data_log().await {
                        Ok(()) => tracing::info!("Data log deleted"),
                        Err(e) => tracing::error!("Error deleting data log: {}", e),
                    }
                });
                Navigation::Reload
            }
            LogResetReload::AfterCompletion => {
                self.delete_data_log().await;
                Navigation::Reload
            }
            LogResetReload::OnSuccess => {
                if self.delete_data_log().await {
                    Navigation::Reload
                } else {
                    Navigation::Stay
                }
            }
        }
    }

    pub async fn save_network(&self, ssid: &str, password: &str) -> Navigation {
        if ssid.trim().is_empty() {
            tracing::warn!("Refusing to save network settings with an empty SSID");
            return Navigation::Stay;
        }

        match self.gateway.save_network(ssid, password).await {
            Ok(()) => {
                tracing::info!("Network settings saved for SSID {:?}, device restarting", ssid);
                Navigation::Reload
            }
            Err(e) => {
                tracing::error!("Error saving network settings: {}", e);
                Navigation::Stay
            }
        }
    }

    async fn delete_data_log(&self) -> bool {
        match self.gateway.delete_data_log().await {
            Ok(()) => {
                tracing::info!("Data log deleted");
                true
            }
            Err(e) => {
                tracing::error!("Error deleting data log: {}", e);
                false
            }
        }
    }
}
