//! UI helpers for the command-line front end
//!
//! Interactive terminals get an indicatif progress bar; CI and piped
//! output fall back to plain lines.

mod context;
mod output;
mod progress;

pub use context::UiContext;
pub use output::{key_value, step_ok};
pub use progress::DownloadProgress;
