// HTTP request handlers
use crate::application::maintenance_service::Navigation;
use crate::infrastructure::http_response::{accepts_brotli, json_response};
use crate::presentation::app_state::AppState;
use crate::presentation::page::render_dashboard;
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use std::sync::Arc;

pub const DASHBOARD_PATH: &str = "/";

#[derive(Deserialize)]
pub struct NetworkForm {
    pub ssid: String,
    #[serde(default)]
    pub pass: String,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Dashboard page; the log is fetched once per load
pub async fn dashboard_page(State(state): State<Arc<AppState>>) -> Html<String> {
    let chart = state.controller.on_load().await;
    let loaded_at = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

    Html(render_dashboard(
        chart.as_ref(),
        state.controller.triggers(),
        &loaded_at,
    ))
}

/// Chart options as JSON, for clients that draw the chart themselves
pub async fn chart_options(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    let Some(chart) = state.controller.on_load().await else {
        return StatusCode::BAD_GATEWAY.into_response();
    };

    match json_response(&chart, accepts_brotli(&headers)).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

pub async fn refresh(State(state): State<Arc<AppState>>) -> Response {
    navigate(state.controller.on_refresh())
}

pub async fn delete_network(State(state): State<Arc<AppState>>) -> Response {
    navigate(state.controller.on_reset_network().await)
}

pub async fn delete_data_log(State(state): State<Arc<AppState>>) -> Response {
    navigate(state.controller.on_reset_log().await)
}

pub async fn save_network(
    State(state): State<Arc<AppState>>,
    Form(form): Form<NetworkForm>,
) -> Response {
    navigate(state.controller.on_save_network(&form.ssid, &form.pass).await)
}

/// A reload sends the browser back to the dashboard; 204 leaves it where it is
fn navigate(navigation: Navigation) -> Response {
    match navigation {
        Navigation::Reload => Redirect::to(DASHBOARD_PATH).into_response(),
        Navigation::Stay => StatusCode::NO_CONTENT.into_response(),
    }
}
