//! Path and install commands - resolve or download the executable

use crate::cli::Settings;
use crate::error::TailwindResult;
use crate::provisioner::Tailwind;
use crate::ui::{self, UiContext};

/// Print the executable path, downloading it on first use
pub fn path(settings: &Settings) -> TailwindResult<()> {
    let tailwind = Tailwind::with_options(settings.options())?;
    println!("{}", tailwind.bin_path().display());
    Ok(())
}

/// Download with progress and report the installed location
pub fn install(settings: &Settings) -> TailwindResult<()> {
    let ctx = UiContext::detect();
    let tailwind = Tailwind::with_options(settings.options().show_progress(true))?;

    ui::step_ok(
        &ctx,
        &format!("Tailwind CSS executable at {}", tailwind.bin_path().display()),
    );
    Ok(())
}
