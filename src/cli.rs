use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate, generate_to};
use reqwest::Url;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_HTML_PATH: &str = "data/output/dashboard.html";
pub const DEFAULT_CHART_PATH: &str = "data/output/sparkline.json";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 20;

pub const SAVE_HTML_HELP: &str = "Save the rendered dashboard as an HTML page (defaults to data/output/dashboard.html when no path is provided).";
pub const SAVE_CHART_HELP: &str = "Save the sparkline chart configuration as JSON (defaults to data/output/sparkline.json when no path is provided).";

#[derive(Debug, Parser)]
#[command(
    name = "salesdash",
    about = "Fetch the sales summary and render the dashboard fields and weekly sparkline.",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    #[arg(
        long,
        value_name = "URL",
        default_value = DEFAULT_BASE_URL,
        help = "Base URL of the server exposing /api/sales-summary."
    )]
    pub base_url: Url,
    #[arg(
        long,
        value_name = "COOKIE",
        help = "Cookie header to send with the request, e.g. session=<value> from a logged-in browser."
    )]
    pub session_cookie: Option<String>,
    #[arg(
        long,
        value_name = "SECONDS",
        default_value_t = DEFAULT_TIMEOUT_SECONDS,
        help = "Give up on the request after this many seconds."
    )]
    pub timeout_secs: u64,
    #[arg(
        long,
        value_name = "FILE",
        num_args = 0..=1,
        default_missing_value = DEFAULT_HTML_PATH,
        help = SAVE_HTML_HELP
    )]
    pub save_html: Option<PathBuf>,
    #[arg(
        long,
        value_name = "FILE",
        num_args = 0..=1,
        default_missing_value = DEFAULT_CHART_PATH,
        help = SAVE_CHART_HELP
    )]
    pub save_chart: Option<PathBuf>,
    #[arg(long, help = "Disable progress spinner output.")]
    pub no_progress: bool,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate shell completion scripts, optionally installing them for the current user.
    Completions {
        #[arg(value_enum, help = "Shell to generate completions for.")]
        shell: Shell,
        #[arg(
            long,
            value_name = "DIR",
            help = "Directory to write the completion script to."
        )]
        output_dir: Option<PathBuf>,
        #[arg(
            long,
            help = "Install the completion script into the default location for the selected shell."
        )]
        install: bool,
    },
}

pub fn handle_command(command: Commands) -> Result<()> {
    match command {
        Commands::Completions {
            shell,
            output_dir,
            install,
        } => generate_completions(shell, output_dir, install),
    }
}

fn generate_completions(shell: Shell, output_dir: Option<PathBuf>, install: bool) -> Result<()> {
    let mut command = Cli::command();
    let bin_name = command.get_name().to_string();

    let target_dir = match output_dir {
        Some(dir) => Some(dir),
        None if install => Some(default_install_dir(shell)?),
        None => None,
    };

    if let Some(dir) = target_dir {
        fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create completion directory {}", dir.display()))?;
        let path = generate_to(shell, &mut command, bin_name, &dir)
            .context("failed to write completion file")?;
        println!("Installed {shell:?} completions to {}", path.display());
    } else {
        let mut stdout = io::stdout().lock();
        generate(shell, &mut command, bin_name, &mut stdout);
        stdout
            .flush()
            .context("failed to flush completion output")?;
    }

    Ok(())
}

fn default_install_dir(shell: Shell) -> Result<PathBuf> {
    let home = std::env::var_os("HOME").ok_or_else(|| {
        anyhow!("HOME environment variable is not set; use --output-dir to specify a path")
    })?;
    let mut path = PathBuf::from(home);

    let relative = match shell {
        Shell::Bash => ".local/share/bash-completion/completions",
        Shell::Elvish => ".elvish/lib/completions",
        Shell::Fish => ".config/fish/completions",
        Shell::PowerShell => ".local/share/powershell/Scripts",
        Shell::Zsh => ".local/share/zsh/site-functions",
        other => {
            return Err(anyhow!(
                "no default install location for {other:?}; specify --output-dir"
            ));
        }
    };
    path.push(relative);
    Ok(path)
}
