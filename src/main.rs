use crate::cli::Cli;
use crate::client::{fetch_summary, summary_endpoint};
use crate::dom::HostPage;
use crate::progress::{ProgressState, Stage, is_dumb_term, run_with_spinner};
use crate::render::render_dashboard;
use crate::report::{HtmlReportContext, save_chart_config, save_html_report};
use crate::summary::{SummaryContext, SummaryPaths, print_summary};
use anyhow::{Context, Result, anyhow};
use chrono::Local;
use clap::Parser;
use reqwest::Client;
use std::path::Path;
use std::time::Duration;
use tokio::fs;

mod chart;
mod cli;
mod client;
mod dom;
mod formatting;
mod model;
mod progress;
mod render;
mod report;
mod summary;

#[tokio::main]
async fn main() -> Result<()> {
    colored::control::set_override(true);

    let mut cli = Cli::parse();

    if let Some(command) = cli.command.take() {
        crate::cli::handle_command(command)?;
        return Ok(());
    }

    let Cli {
        base_url,
        session_cookie,
        timeout_secs,
        save_html,
        save_chart,
        no_progress,
        ..
    } = cli;

    let client = Client::builder()
        .user_agent(concat!("salesdash/", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .context("failed to build HTTP client")?;
    let endpoint = summary_endpoint(&base_url)?;
    let progress = ProgressState::new(!no_progress, true)?;

    let summary = run_with_spinner(
        &progress,
        Stage::Fetch,
        endpoint.as_str(),
        fetch_summary(&client, &endpoint, session_cookie.as_deref()),
    )
    .await?;
    let fetched_at = Local::now();

    let mut page = HostPage::new();
    render_dashboard(&summary, &mut page.texts, &mut page.canvases)?;

    run_with_spinner(&progress, Stage::Render, "dashboard outputs", async {
        if let Some(path) = save_html.as_deref() {
            let context = HtmlReportContext {
                page: &page,
                endpoint: &endpoint,
                fetched_at: &fetched_at,
            };
            save_html_report(path, &context).await?;
        }
        if let Some(path) = save_chart.as_deref() {
            let config = page
                .sparkline()
                .ok_or_else(|| anyhow!("no sparkline chart was mounted"))?;
            save_chart_config(path, config).await?;
        }
        Ok(())
    })
    .await?;

    print_summary(&SummaryContext {
        endpoint: &endpoint,
        fetched_at: &fetched_at,
        page: &page,
        paths: SummaryPaths {
            html: save_html.as_deref(),
            chart: save_chart.as_deref(),
        },
        ascii: is_dumb_term(),
    });

    Ok(())
}

pub(crate) async fn write_output_file(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }

    fs::write(path, bytes)
        .await
        .with_context(|| format!("failed to write {}", path.display()))?;

    Ok(())
}
