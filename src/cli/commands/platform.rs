//! Platform command - show what would be downloaded

use crate::error::TailwindResult;
use crate::platform::Platform;
use crate::provisioner::download_url;
use crate::ui;
use console::style;

/// Execute the platform command
pub fn execute() -> TailwindResult<()> {
    let platform = Platform::detect();

    ui::key_value("OS", &platform.os);
    ui::key_value("Arch", &platform.arch);

    match platform.executable_filename() {
        Ok(filename) => {
            ui::key_value("Asset", filename);
            ui::key_value("URL", &download_url(filename));
        }
        Err(_) => ui::key_value("Asset", &style("unsupported").red().to_string()),
    }

    Ok(())
}
