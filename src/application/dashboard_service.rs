// Dashboard service - Use case for building the state chart
use crate::application::device_gateway::DeviceGateway;
use crate::domain::chart::{ChartConfig, ChartTheme};
use crate::domain::event_log::StateSeries;
use std::sync::Arc;

#[derive(Clone)]
pub struct DashboardService {
    gateway: Arc<dyn DeviceGateway>,
    theme: ChartTheme,
}

impl DashboardService {
    pub fn new(gateway: Arc<dyn DeviceGateway>, theme: ChartTheme) -> Self {
        Self { gateway, theme }
    }

    /// Fetch, transform and render. Any fetch or decode failure is logged and
    /// yields no chart for this pass.
    pub async fn load_chart(&self) -> Option<ChartConfig> {
        let entries = match self.gateway.fetch_log().await {
            Ok(entries) => entries,
            Err(e) => {
                tracing::error!("Error fetching event log: {}", e);
                return None;
            }
        };

        let series = StateSeries::from_entries(&entries);
        if series.is_empty() {
            tracing::info!("Event log is empty, rendering an empty chart");
        } else if series.unrecognized() > 0 {
            tracing::warn!(
                "{} of {} log entries have an unrecognized state",
                series.unrecognized(),
                series.len()
            );
        }
        tracing::debug!("Rendering state chart with {} points", series.len());

        Some(ChartConfig::render(&series, &self.theme))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::device_gateway::fake::FakeGateway;
    use crate::domain::event_log::LogEntry;
    use std::sync::atomic::Ordering;

    #[tokio::test]
    async fn test_renders_chart_from_log() {
        let gateway = Arc::new(FakeGateway::with_log(vec![
            LogEntry::new("Key is not touching", "t1"),
            LogEntry::new("Key touching", "t2"),
            LogEntry::new("Open lock", "t3"),
        ]));
        let service = DashboardService::new(gateway.clone(), ChartTheme::default());

        let chart = service.load_chart().await.expect("chart should render");

        assert_eq!(chart.series[0].data, vec![0, 1, 2]);
        assert_eq!(chart.x_axis.categories, vec!["t1", "t2", "t3"]);
        assert_eq!(gateway.log_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_unknown_state_still_renders() {
        let gateway = Arc::new(FakeGateway::with_log(vec![
            LogEntry::new("Unknown", "t4"),
            LogEntry::new("Open lock", "t5"),
        ]));
        let service = DashboardService::new(gateway, ChartTheme::default());

        let chart = service.load_chart().await.expect("chart should render");

        assert_eq!(chart.series[0].data, vec![-1, 2]);
    }

    #[tokio::test]
    async fn test_empty_log_renders_empty_chart() {
        let service = DashboardService::new(Arc::new(FakeGateway::with_log(vec![])), ChartTheme::default());

        let chart = service.load_chart().await.expect("chart should render");

        assert!(chart.series[0].data.is_empty());
        assert!(chart.x_axis.categories.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_failure_yields_no_chart() {
        let gateway = Arc::new(FakeGateway::default());
        let service = DashboardService::new(gateway.clone(), ChartTheme::default());

        assert!(service.load_chart().await.is_none());
        assert_eq!(gateway.log_calls.load(Ordering::SeqCst), 1);
    }
}
