use anyhow::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::future::Future;
use std::time::Duration;

const SPINNER_TICKS_BRAILLE_COLORED: [&str; 8] = [
    "\x1b[1;96m⠁\x1b[0m",
    "\x1b[1;96m⠂\x1b[0m",
    "\x1b[1;96m⠄\x1b[0m",
    "\x1b[1;96m⡀\x1b[0m",
    "\x1b[1;96m⢀\x1b[0m",
    "\x1b[1;96m⠠\x1b[0m",
    "\x1b[1;96m⠐\x1b[0m",
    "\x1b[1;96m⠈\x1b[0m",
];

const SPINNER_TICKS_BRAILLE_PLAIN: [&str; 8] = ["⠁", "⠂", "⠄", "⡀", "⢀", "⠠", "⠐", "⠈"];
const SPINNER_TICKS_ASCII: &str = "|/-\\";

const STAGE_TOTAL: u8 = 2;

#[derive(Clone, Copy)]
pub enum Stage {
    Fetch,
    Render,
}

impl Stage {
    const fn index(self) -> u8 {
        match self {
            Self::Fetch => 1,
            Self::Render => 2,
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Fetch => "Fetch",
            Self::Render => "Render",
        }
    }
}

/// Stage spinners on stderr. A disabled state runs futures without drawing anything.
pub struct ProgressState {
    style: Option<ProgressStyle>,
}

impl ProgressState {
    pub(crate) fn new(enabled: bool, use_color: bool) -> Result<Self> {
        if !enabled {
            return Ok(Self { style: None });
        }
        let style = ProgressStyle::with_template("{spinner} {msg}")?;
        let style = if is_dumb_term() {
            style.tick_chars(SPINNER_TICKS_ASCII)
        } else if use_color {
            style.tick_strings(&SPINNER_TICKS_BRAILLE_COLORED)
        } else {
            style.tick_strings(&SPINNER_TICKS_BRAILLE_PLAIN)
        };
        Ok(Self { style: Some(style) })
    }

    fn spinner(&self, message: String) -> Option<ProgressBar> {
        let style = self.style.as_ref()?;
        let bar = ProgressBar::with_draw_target(None, ProgressDrawTarget::stderr_with_hz(15));
        bar.set_style(style.clone());
        bar.set_message(message);
        bar.enable_steady_tick(Duration::from_millis(100));
        Some(bar)
    }
}

pub(crate) fn is_dumb_term() -> bool {
    std::env::var("TERM").is_ok_and(|term| term.eq_ignore_ascii_case("dumb"))
}

fn format_stage_message(stage: Stage, label: &str) -> String {
    let prefix = format!("[{}/{}]", stage.index(), STAGE_TOTAL);
    format!(
        "{} {}: {}",
        prefix.bright_yellow().bold(),
        stage.label().bright_cyan().bold(),
        label.bright_white().bold()
    )
}

pub async fn run_with_spinner<T>(
    progress: &ProgressState,
    stage: Stage,
    label: &str,
    fut: impl Future<Output = Result<T>>,
) -> Result<T> {
    let Some(bar) = progress.spinner(format_stage_message(stage, label)) else {
        return fut.await;
    };
    let result = fut.await;
    let outcome = if result.is_ok() {
        "done".bright_green().bold()
    } else {
        "failed".bright_red().bold()
    };
    bar.finish_with_message(format!("{} {}", format_stage_message(stage, label), outcome));
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[tokio::test]
    async fn disabled_progress_passes_results_through() {
        let progress = ProgressState::new(false, false).unwrap();
        let value = run_with_spinner(&progress, Stage::Fetch, "ok", async { Ok(7) })
            .await
            .unwrap();
        assert_eq!(value, 7);

        let err = run_with_spinner(&progress, Stage::Render, "boom", async {
            Err::<(), _>(anyhow!("boom"))
        })
        .await
        .unwrap_err();
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn stage_message_counts_stages() {
        colored::control::set_override(false);
        assert_eq!(
            format_stage_message(Stage::Render, "write outputs"),
            "[2/2] Render: write outputs"
        );
    }
}
