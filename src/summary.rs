use crate::chart::WEEKDAY_LABELS;
use crate::dom::{HostPage, TextTarget};
use crate::formatting::{format_amount, sparkline_bars};
use chrono::{DateTime, Local};
use colored::Colorize;
use reqwest::Url;
use std::path::Path;

const HEADER: &str = "==================== Sales Dashboard ====================";

pub struct SummaryPaths<'a> {
    pub(crate) html: Option<&'a Path>,
    pub(crate) chart: Option<&'a Path>,
}

pub struct SummaryContext<'a> {
    pub(crate) endpoint: &'a Url,
    pub(crate) fetched_at: &'a DateTime<Local>,
    pub(crate) page: &'a HostPage,
    pub(crate) paths: SummaryPaths<'a>,
    pub(crate) ascii: bool,
}

pub fn print_summary(context: &SummaryContext<'_>) {
    println!();
    print_summary_header(context);
    print_summary_paths(&context.paths);
    println!();
    print_fields(context.page);
    println!();
    println!("{}", "Weekly revenue".bold().bright_magenta());
    print_sparkline(context.page, context.ascii);
    println!("{}", "=".repeat(HEADER.len()).bright_cyan());
}

fn print_summary_header(context: &SummaryContext<'_>) {
    println!("{}", HEADER.bold().bright_cyan());
    println!(
        "{} {}",
        "Fetched at".bright_yellow().bold(),
        context
            .fetched_at
            .format("%Y-%m-%d %H:%M:%S %Z")
            .to_string()
            .bright_white()
    );
    println!(
        "{} {}",
        "Endpoint".bright_yellow().bold(),
        context.endpoint.as_str().bright_white()
    );
}

fn print_summary_paths(paths: &SummaryPaths<'_>) {
    print_path_line("HTML page", paths.html, "not saved (use --save-html)");
    print_path_line("Chart JSON", paths.chart, "not saved (use --save-chart)");
}

fn print_path_line(label: &str, path: Option<&Path>, hint: &str) {
    let label_colored = label.bright_yellow().bold();
    match path {
        Some(path) => println!(
            "{} {}",
            label_colored,
            format!("{}", path.display()).bright_white()
        ),
        None => println!("{} {}", label_colored, hint.bright_black()),
    }
}

fn print_fields(page: &HostPage) {
    for target in TextTarget::ALL {
        let text = page.text(target);
        let value = if text.is_empty() {
            "-".bright_black()
        } else {
            text.bright_green().bold()
        };
        println!("{:<12} {}", format!("{}:", target.label()).bold().bright_white(), value);
    }
}

fn print_sparkline(page: &HostPage, ascii: bool) {
    let Some(config) = page.sparkline() else {
        println!("{}", "No chart mounted.".bright_black());
        return;
    };
    let series = config.series();
    // Each bar sits under the middle letter of its weekday label.
    let bars: String = sparkline_bars(series, ascii)
        .chars()
        .map(|bar| format!(" {bar}   "))
        .collect();
    println!("  {}", bars.trim_end().bright_blue().bold());
    println!("  {}", WEEKDAY_LABELS.join("  ").bright_black());
    if let Some(&latest) = series.last() {
        println!(
            "  {} {}",
            "Today".bright_yellow().bold(),
            format_amount(latest).bright_white()
        );
    }
}
