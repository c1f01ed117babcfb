use crate::chart::{ChartConfig, SPARKLINE_CANVAS_ID};
use crate::dom::{HostPage, TextTarget};
use crate::write_output_file;
use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use reqwest::Url;
use std::path::Path;

const CHARTJS_CDN: &str = "https://cdn.jsdelivr.net/npm/chart.js";

pub struct HtmlReportContext<'a> {
    pub(crate) page: &'a HostPage,
    pub(crate) endpoint: &'a Url,
    pub(crate) fetched_at: &'a DateTime<Local>,
}

pub async fn save_html_report(output_path: &Path, context: &HtmlReportContext<'_>) -> Result<()> {
    let html = render_html_report(context)?;
    write_output_file(output_path, html.as_bytes()).await
}

/// Writes the mounted chart configuration as pretty-printed JSON.
pub async fn save_chart_config(output_path: &Path, config: &ChartConfig) -> Result<()> {
    let json = serde_json::to_vec_pretty(config).context("failed to serialize chart config")?;
    write_output_file(output_path, &json).await
}

fn render_html_report(context: &HtmlReportContext<'_>) -> Result<String> {
    let mount_script = context
        .page
        .sparkline()
        .map(mount_script)
        .transpose()?;
    let generated_at = context
        .fetched_at
        .format("%Y-%m-%d %H:%M:%S %Z")
        .to_string();
    let title = format!("Sales Dashboard - {}", context.fetched_at.format("%Y-%m-%d"));

    let markup: Markup = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                style { (PreEscaped(REPORT_STYLE)) }
            }
            body {
                div class="page" {
                    header class="hero" {
                        div class="pill" { "salesdash v" (env!("CARGO_PKG_VERSION")) }
                        h1 { "Sales Dashboard" }
                        div class="meta" {
                            div {
                                span class="label" { "Fetched" }
                                span class="value mono" { (generated_at) }
                            }
                            div {
                                span class="label" { "Source" }
                                span class="value mono" { (context.endpoint.as_str()) }
                            }
                        }
                    }
                    section class="cards" {
                        @for target in TextTarget::ALL {
                            div class="card" {
                                div class="card-label" { (target.label()) }
                                div class="card-value" id=(target.element_id()) {
                                    (context.page.text(target))
                                }
                            }
                        }
                    }
                    section class="chart-card" {
                        div class="card-label" { "Last seven days" }
                        canvas id=(SPARKLINE_CANVAS_ID) height="80" {}
                    }
                }
                @if let Some(mount) = &mount_script {
                    script src=(CHARTJS_CDN) {}
                    script { (PreEscaped(mount)) }
                }
            }
        }
    };

    Ok(markup.into_string())
}

fn mount_script(config: &ChartConfig) -> Result<String> {
    let json = serde_json::to_string(config).context("failed to serialize chart config")?;
    // The config is inlined into a <script> block.
    let json = json.replace('<', "\\u003c");
    Ok(format!(
        "new Chart(document.getElementById('{SPARKLINE_CANVAS_ID}').getContext('2d'), {json});"
    ))
}

const REPORT_STYLE: &str = r#"
:root {
  --bg: #f4f6fb;
  --ink: #1c2230;
  --muted: #6a7385;
  --card: #ffffff;
  --accent: #007bff;
  --border: #dde3ee;
}

* {
  box-sizing: border-box;
}

body {
  margin: 0;
  font-family: "Segoe UI", system-ui, sans-serif;
  color: var(--ink);
  background: var(--bg);
}

.page {
  max-width: 960px;
  margin: 0 auto;
  padding: 40px 20px 56px;
}

.hero {
  background: var(--card);
  border: 1px solid var(--border);
  border-radius: 20px;
  padding: 28px 32px;
}

.pill {
  display: inline-block;
  padding: 4px 12px;
  border-radius: 999px;
  background: rgba(0, 123, 255, 0.1);
  color: var(--accent);
  font-size: 12px;
  font-weight: 600;
  text-transform: uppercase;
}

h1 {
  margin: 12px 0 16px;
}

.meta {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
  gap: 12px;
}

.label,
.card-label {
  display: block;
  font-size: 12px;
  text-transform: uppercase;
  letter-spacing: 0.1em;
  color: var(--muted);
  margin-bottom: 6px;
}

.value {
  font-weight: 600;
  word-break: break-all;
}

.mono {
  font-family: ui-monospace, monospace;
}

.cards {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
  gap: 16px;
  margin: 24px 0;
}

.card,
.chart-card {
  background: var(--card);
  border: 1px solid var(--border);
  border-radius: 16px;
  padding: 18px 20px;
}

.card-value {
  font-size: 28px;
  font-weight: 600;
}
"#;
