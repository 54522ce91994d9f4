//! Download progress with CI fallback

use super::context::UiContext;
use console::style;
use indicatif::{HumanBytes, ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress indicator for a single executable download.
///
/// Shows an indicatif byte bar in interactive mode, a single plain line
/// in CI, and nothing at all when created with `hidden`.
pub struct DownloadProgress {
    bar: Option<ProgressBar>,
    plain: bool,
}

impl DownloadProgress {
    /// Create a progress indicator for `label`, or a hidden one without a context
    pub fn new(ctx: Option<&UiContext>, label: &str) -> Self {
        match ctx {
            Some(ctx) if ctx.use_fancy_output() => {
                let bar = ProgressBar::new(0);
                bar.set_style(
                    ProgressStyle::default_bar()
                        .template("  {spinner:.cyan} Downloading {prefix}  {bar:20.cyan/dim} {bytes}/{total_bytes} {bytes_per_sec:.dim}")
                        .unwrap_or_else(|_| ProgressStyle::default_bar())
                        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ")
                        .progress_chars("━╸─"),
                );
                bar.set_prefix(label.to_string());
                bar.enable_steady_tick(Duration::from_millis(120));
                Self {
                    bar: Some(bar),
                    plain: false,
                }
            }
            Some(_) => {
                eprintln!("{} Downloading {}", style("...").dim(), label);
                Self {
                    bar: None,
                    plain: true,
                }
            }
            None => Self::hidden(),
        }
    }

    /// A progress indicator that draws nothing
    pub fn hidden() -> Self {
        Self {
            bar: None,
            plain: false,
        }
    }

    /// Report bytes transferred so far
    pub fn update(&self, downloaded: u64, total: Option<u64>) {
        if let Some(ref bar) = self.bar {
            if let Some(total) = total {
                bar.set_length(total);
            }
            bar.set_position(downloaded);
        }
    }

    /// Finish after a successful download
    pub fn finish(&self, downloaded: u64) {
        if let Some(ref bar) = self.bar {
            bar.disable_steady_tick();
            bar.finish_and_clear();
        } else if self.plain {
            eprintln!("{} Downloaded {}", style("[OK]").green(), HumanBytes(downloaded));
        }
    }

    /// Stop after a failed download
    pub fn abandon(&self) {
        if let Some(ref bar) = self.bar {
            bar.disable_steady_tick();
            bar.abandon();
        }
    }
}
