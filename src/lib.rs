//! tailwindcss-bin - Tailwind CSS standalone executable provisioner
//!
//! Locates or downloads the platform-specific Tailwind CSS executable,
//! remembers where it lives, and builds the argument vectors that run it.
//!
//! ```rust,no_run
//! use tailwindcss_bin::Tailwind;
//!
//! let tailwind = Tailwind::new()?;
//! let args = tailwind.watch_command("src/input.css", "dist/output.css");
//! # Ok::<(), tailwindcss_bin::TailwindError>(())
//! ```

pub mod backend;
pub mod bin_dir;
pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod platform;
pub mod provisioner;
pub mod ui;

pub use backend::{Backend, SystemBackend};
pub use error::{TailwindError, TailwindResult};
pub use platform::Platform;
pub use provisioner::{Tailwind, TailwindOptions};
