// Dashboard controller - The page's triggers and what each one does
use crate::application::dashboard_service::DashboardService;
use crate::application::maintenance_service::{MaintenanceService, Navigation};
use crate::domain::chart::ChartConfig;

/// Routes the dashboard page posts its buttons to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerHandles {
    pub refresh: &'static str,
    pub reset_network: &'static str,
    pub reset_log: &'static str,
    pub save_network: &'static str,
}

impl Default for TriggerHandles {
    fn default() -> Self {
        Self {
            refresh: "/actions/refresh",
            reset_network: "/actions/delete-network",
            reset_log: "/actions/delete-data-log",
            save_network: "/actions/save-network",
        }
    }
}

#[derive(Clone)]
pub struct DashboardController {
    triggers: TriggerHandles,
    dashboard: DashboardService,
    maintenance: MaintenanceService,
}

impl DashboardController {
    pub fn new(
        triggers: TriggerHandles,
        dashboard: DashboardService,
        maintenance: MaintenanceService,
    ) -> Self {
        Self {
            triggers,
            dashboard,
            maintenance,
        }
    }

    pub fn triggers(&self) -> &TriggerHandles {
        &self.triggers
    }

    /// Page load entry point: one pipeline run per call
    pub async fn on_load(&self) -> Option<ChartConfig> {
        self.dashboard.load_chart().await
    }

    pub fn on_refresh(&self) -> Navigation {
        Navigation::Reload
    }

    pub async fn on_reset_network(&self) -> Navigation {
        self.maintenance.reset_network().await
    }

    pub async fn on_reset_log(&self) -> Navigation {
        self.maintenance.reset_event_log().await
    }

    pub async fn on_save_network(&self, ssid: &str, password: &str) -> Navigation {
        self.maintenance.save_network(ssid, password).await
    }
}
