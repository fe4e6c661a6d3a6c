// Router assembly
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    chart_options, dashboard_page, delete_data_log, delete_network, health_check, refresh,
    save_network, DASHBOARD_PATH,
};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn build(state: Arc<AppState>) -> Router {
    let triggers = state.controller.triggers().clone();

    Router::new()
        .route("/healthz", get(health_check))
        .route(DASHBOARD_PATH, get(dashboard_page))
        .route("/chart.json", get(chart_options))
        .route(triggers.refresh, post(refresh))
        .route(triggers.reset_network, post(delete_network))
        .route(triggers.reset_log, post(delete_data_log))
        .route(triggers.save_network, post(save_network))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
