// Dashboard page rendering
use crate::domain::chart::ChartConfig;
use crate::presentation::controller::TriggerHandles;

const CHART_CONTAINER: &str = "chart-states";
const HIGHCHARTS_SRC: &str = "https://code.highcharts.com/highcharts.js";

/// Render the dashboard. Without a chart the container stays empty and no
/// chart call is emitted.
pub fn render_dashboard(chart: Option<&ChartConfig>, triggers: &TriggerHandles, loaded_at: &str) -> String {
    let chart_script = match chart.map(chart_json) {
        Some(Ok(json)) => format!(
            "<script src=\"{HIGHCHARTS_SRC}\"></script>\n\
             <script>Highcharts.chart(\"{CHART_CONTAINER}\", {json});</script>"
        ),
        Some(Err(e)) => {
            tracing::error!("Failed to encode chart options: {}", e);
            String::new()
        }
        None => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>RFID Key Reader</title>
  <style>
    body {{ background: #222222; color: #E0E0E0; font-family: sans-serif; margin: 2rem; }}
    #{CHART_CONTAINER} {{ min-height: 400px; }}
    form {{ display: inline-block; margin-right: 0.5rem; }}
    button {{ padding: 0.4rem 1rem; }}
    footer {{ margin-top: 1rem; font-size: 0.8rem; color: #999999; }}
  </style>
</head>
<body>
  <h1>RFID Key Reader</h1>
  <div id="{CHART_CONTAINER}"></div>
  <section>
    <form method="post" action="{refresh}"><button id="refreshButton">Refresh</button></form>
    <form method="post" action="{reset_network}"><button id="deleteNetworkBtn">Delete network setting</button></form>
    <form method="post" action="{reset_log}"><button id="deleteDataLogBtn">Delete data log</button></form>
  </section>
  <section>
    <h2>Network</h2>
    <form method="post" action="{save_network}">
      <input name="ssid" placeholder="SSID" required>
      <input name="pass" type="password" placeholder="Password">
      <button>Save</button>
    </form>
  </section>
  <footer>Loaded {loaded_at}</footer>
  {chart_script}
</body>
</html>
"#,
        refresh = triggers.refresh,
        reset_network = triggers.reset_network,
        reset_log = triggers.reset_log,
        save_network = triggers.save_network,
        loaded_at = loaded_at,
        chart_script = chart_script,
    )
}

/// JSON that is safe to inline in a script element
fn chart_json(chart: &ChartConfig) -> serde_json::Result<String> {
    // `<` can only occur inside JSON strings, where `\u003c` decodes to it
    Ok(serde_json::to_string(chart)?.replace('<', "\\u003c"))
}
