// Chart configuration domain model
//
// Serializes to the option object accepted by `Highcharts.chart(container, options)`.
use super::event_log::StateSeries;
use super::key_state::STATE_LABELS;
use serde::Serialize;

pub const DEFAULT_TITLE: &str = "RFID State Changes";
pub const SERIES_NAME: &str = "State";

/// Colors and captions for the state chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartTheme {
    pub title: String,
    pub background: String,
    pub text: String,
    pub line: String,
    pub series: String,
    pub marker_fill: String,
    pub marker_outline: String,
    pub tooltip_background: String,
    pub tooltip_border: String,
    pub tooltip_text: String,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            background: "#333333".to_string(),
            text: "#E0E0E0".to_string(),
            line: "#FF0000".to_string(),
            series: "#00FF00".to_string(),
            marker_fill: "#FF0000".to_string(),
            marker_outline: "#FFFFFF".to_string(),
            tooltip_background: "#000000".to_string(),
            tooltip_border: "#FFFFFF".to_string(),
            tooltip_text: "#FFFFFF".to_string(),
        }
    }
}

impl ChartTheme {
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    pub chart: ChartOptions,
    pub title: Caption,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub tooltip: Tooltip,
    pub plot_options: PlotOptions,
    pub series: Vec<LineSeries>,
    pub legend: Legend,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub background_color: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextStyle {
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Caption {
    pub text: String,
    pub style: TextStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisLabels {
    pub style: TextStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    pub categories: Vec<String>,
    pub title: Caption,
    pub labels: AxisLabels,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tick_interval: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tooltip {
    pub header_format: &'static str,
    pub point_format: &'static str,
    pub background_color: String,
    pub border_color: String,
    pub style: TextStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotOptions {
    pub line: LineOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineOptions {
    pub marker: Marker,
    pub line_width: u32,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Marker {
    pub radius: u32,
    pub line_width: u32,
    pub line_color: String,
    pub fill_color: String,
    pub symbol: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineSeries {
    pub name: &'static str,
    pub data: Vec<i32>,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Legend {
    pub item_style: TextStyle,
}

impl ChartConfig {
    /// Build the single-series state chart. Pure: same input, same output.
    ///
    /// Sentinel ordinals are passed through; the chart library draws them
    /// below the first category instead of failing.
    pub fn render(series: &StateSeries, theme: &ChartTheme) -> Self {
        let text = || TextStyle {
            color: theme.text.clone(),
        };
        let caption = |t: &str| Caption {
            text: t.to_string(),
            style: text(),
        };

        Self {
            chart: ChartOptions {
                background_color: theme.background.clone(),
                kind: "line",
            },
            title: caption(&theme.title),
            x_axis: Axis {
                categories: series.timestamps().to_vec(),
                title: caption("Timestamp"),
                labels: AxisLabels { style: text() },
                tick_interval: None,
            },
            y_axis: Axis {
                categories: STATE_LABELS.iter().map(|l| l.to_string()).collect(),
                title: caption("State"),
                labels: AxisLabels { style: text() },
                tick_interval: Some(1),
            },
            tooltip: Tooltip {
                header_format: "",
                point_format: "{point.category}: {point.y}",
                background_color: theme.tooltip_background.clone(),
                border_color: theme.tooltip_border.clone(),
                style: TextStyle {
                    color: theme.tooltip_text.clone(),
                },
            },
            plot_options: PlotOptions {
                line: LineOptions {
                    marker: Marker {
                        radius: 4,
                        line_width: 1,
                        line_color: theme.marker_outline.clone(),
                        fill_color: theme.marker_fill.clone(),
                        symbol: "circle",
                    },
                    line_width: 2,
                    color: theme.line.clone(),
                },
            },
            series: vec![LineSeries {
                name: SERIES_NAME,
                data: series.states().to_vec(),
                color: theme.series.clone(),
            }],
            legend: Legend { item_style: text() },
        }
    }
}
