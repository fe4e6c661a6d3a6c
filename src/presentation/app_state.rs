// Application state for HTTP handlers
use crate::presentation::controller::DashboardController;

#[derive(Clone)]
pub struct AppState {
    pub controller: DashboardController,
}
