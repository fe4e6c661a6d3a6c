// HTTP gateway to the key reader's embedded web server
use crate::application::device_gateway::{DeviceError, DeviceGateway};
use crate::domain::event_log::LogEntry;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;

const LOG_PATH: &str = "/log";
const DELETE_NETWORK_PATH: &str = "/deleteNetwork";
const DELETE_DATA_LOG_PATH: &str = "/deleteDataLog";
const SAVE_NETWORK_PATH: &str = "/save";

#[derive(Debug, Clone)]
pub struct HttpDeviceGateway {
    base_url: String,
    client: reqwest::Client,
}

impl HttpDeviceGateway {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to build device HTTP client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request and turn any non-2xx answer into an error
    async fn send(
        &self,
        request: reqwest::RequestBuilder,
        endpoint: &'static str,
    ) -> Result<reqwest::Response, DeviceError> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::debug!("Non success response: {} = {}", endpoint, status);
            return Err(DeviceError::Status { endpoint, status });
        }
        tracing::debug!("Success response: {} = {}", endpoint, status);
        Ok(response)
    }

    async fn trigger(&self, endpoint: &'static str) -> Result<(), DeviceError> {
        let response = self.send(self.client.get(self.url(endpoint)), endpoint).await?;
        // body is a human readable confirmation, nothing to parse
        let body = response.text().await.unwrap_or_default();
        tracing::debug!("{} answered: {}", endpoint, body);
        Ok(())
    }
}

#[async_trait]
impl DeviceGateway for HttpDeviceGateway {
    async fn fetch_log(&self) -> Result<Vec<LogEntry>, DeviceError> {
        let request = self
            .client
            .get(self.url(LOG_PATH))
            .header(reqwest::header::ACCEPT, "application/json");
        let body = self.send(request, LOG_PATH).await?.text().await?;

        // only a body that is not a JSON array fails; elements decode one by one
        let values: Vec<serde_json::Value> =
            serde_json::from_str(&body).map_err(|source| DeviceError::Decode {
                endpoint: LOG_PATH,
                source,
            })?;

        Ok(values
            .into_iter()
            .enumerate()
            .map(|(index, value)| LogEntry::from_value(index, value))
            .collect())
    }

    async fn delete_network(&self) -> Result<(), DeviceError> {
        self.trigger(DELETE_NETWORK_PATH).await
    }

    async fn delete_data_log(&self) -> Result<(), DeviceError> {
        self.trigger(DELETE_DATA_LOG_PATH).await
    }

    async fn save_network(&self, ssid: &str, password: &str) -> Result<(), DeviceError> {
        let request = self
            .client
            .post(self.url(SAVE_NETWORK_PATH))
            .form(&[("ssid", ssid), ("pass", password)]);
        self.send(request, SAVE_NETWORK_PATH).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::event_log::StateSeries;
    use axum::http::StatusCode;
    use axum::routing::{get, post};
    use axum::{Form, Router};
    use std::collections::HashMap;

    /// Serve a stand-in device on an ephemeral port, returning its base URL
    async fn spawn_device(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}/", addr)
    }

    fn gateway(base_url: &str) -> HttpDeviceGateway {
        HttpDeviceGateway::new(base_url, Some(Duration::from_secs(5))).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_log_preserves_device_order() {
        let router = Router::new().route(
            "/log",
            get(|| async {
                (
                    [("content-type", "application/json")],
                    r#"[{"timestamp":"10:00:05","state":"Open lock"},{"timestamp":"10:00:01","state":"Key touching"}]"#,
                )
            }),
        );
        let base = spawn_device(router).await;

        let entries = gateway(&base).fetch_log().await.unwrap();

        assert_eq!(
            entries,
            vec![
                LogEntry::new("Open lock", "10:00:05"),
                LogEntry::new("Key touching", "10:00:01"),
            ]
        );
    }

    #[tokio::test]
    async fn test_fetch_log_server_error() {
        let router = Router::new().route("/log", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }));
        let base = spawn_device(router).await;

        let err = gateway(&base).fetch_log().await.unwrap_err();

        assert!(matches!(
            err,
            DeviceError::Status { endpoint: "/log", status } if status == StatusCode::INTERNAL_SERVER_ERROR
        ));
    }

    #[tokio::test]
    async fn test_fetch_log_malformed_body() {
        let router = Router::new()
            .route("/log", get(|| async { r#"{"state":"Open lock"}"# }));
        let base = spawn_device(router).await;

        let err = gateway(&base).fetch_log().await.unwrap_err();

        assert!(matches!(err, DeviceError::Decode { endpoint: "/log", .. }));
    }

    #[tokio::test]
    async fn test_fetch_log_keeps_records_around_a_bad_one() {
        let router = Router::new().route(
            "/log",
            get(|| async {
                r#"[{"state":"Open lock","timestamp":"t1"},{"state":null,"timestamp":"t2"},{"state":"Key touching","timestamp":"t3"}]"#
            }),
        );
        let base = spawn_device(router).await;

        let entries = gateway(&base).fetch_log().await.unwrap();

        assert_eq!(
            entries,
            vec![
                LogEntry::new("Open lock", "t1"),
                LogEntry::new("", "t2"),
                LogEntry::new("Key touching", "t3"),
            ]
        );
        let series = StateSeries::from_entries(&entries);
        assert_eq!(series.states(), &[2, -1, 1]);
    }

    #[tokio::test]
    async fn test_unreachable_device() {
        // bind then drop to get a port nobody listens on
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = gateway(&format!("http://{}", addr)).delete_network().await.unwrap_err();

        assert!(matches!(err, DeviceError::Transport(_)));
    }

    #[tokio::test]
    async fn test_maintenance_endpoints() {
        let router = Router::new()
            .route("/deleteNetwork", get(|| async { "Network settings deleted. Restarting..." }))
            .route("/deleteDataLog", get(|| async { StatusCode::SERVICE_UNAVAILABLE }))
            .route(
                "/save",
                post(|Form(form): Form<HashMap<String, String>>| async move {
                    if form.get("ssid").map(String::as_str) == Some("workshop")
                        && form.get("pass").map(String::as_str) == Some("s3cret")
                    {
                        StatusCode::OK
                    } else {
                        StatusCode::BAD_REQUEST
                    }
                }),
            );
        let base = spawn_device(router).await;
        let gateway = gateway(&base);

        assert!(gateway.delete_network().await.is_ok());
        assert!(matches!(
            gateway.delete_data_log().await,
            Err(DeviceError::Status { endpoint: "/deleteDataLog", .. })
        ));
        assert!(gateway.save_network("workshop", "s3cret").await.is_ok());
        assert!(gateway.save_network("workshop", "wrong").await.is_err());
    }
}
