// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_service::DashboardService;
use crate::application::maintenance_service::MaintenanceService;
use crate::domain::chart::ChartTheme;
use crate::infrastructure::config::load_dashboard_config;
use crate::infrastructure::http_device_gateway::HttpDeviceGateway;
use crate::presentation::app_state::AppState;
use crate::presentation::controller::{DashboardController, TriggerHandles};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = load_dashboard_config()?;

    // Create gateway (infrastructure layer)
    let gateway = Arc::new(HttpDeviceGateway::new(
        &config.device.base_url,
        config.device.timeout(),
    )?);

    // Create services (application layer)
    let dashboard_service = DashboardService::new(gateway.clone(), ChartTheme::with_title(config.chart.title));
    let maintenance_service = MaintenanceService::new(gateway, config.maintenance.log_reset_reload);

    // Create controller and application state
    let controller = DashboardController::new(
        TriggerHandles::default(),
        dashboard_service,
        maintenance_service,
    );
    let state = Arc::new(AppState { controller });

    // Build router (presentation layer)
    let router = presentation::router::build(state);

    // Start server
    let addr: SocketAddr = config
        .server
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address {:?}", config.server.listen_addr))?;
    tracing::info!(
        "Starting keylog-dashboard on {} for device {} (log reset reload: {:?})",
        addr,
        config.device.base_url,
        config.maintenance.log_reset_reload
    );

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
