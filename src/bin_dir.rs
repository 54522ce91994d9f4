//! Bin directory resolution
//!
//! The executable is placed next to the project's vendored dependencies:
//! walk upward from the install root until a directory containing
//! `vendor/` is found and use its `bin/` sibling.

use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the dependency vendor directory that marks a project root
pub const VENDOR_DIR: &str = "vendor";

/// Name of the directory the executable is stored in
pub const BIN_DIR: &str = "bin";

/// Resolve the bin directory for an install root.
///
/// Returns `<ancestor>/bin` for the nearest ancestor (including
/// `install_root` itself) that contains a `vendor` directory, otherwise
/// `<install_root parent>/bin`. Relative roots are made absolute against
/// the current directory first.
pub fn determine_bin_directory(install_root: &Path) -> PathBuf {
    resolve_bin_directory(install_root, VENDOR_DIR)
}

fn resolve_bin_directory(install_root: &Path, marker: &str) -> PathBuf {
    let root = std::path::absolute(install_root).unwrap_or_else(|_| install_root.to_path_buf());

    for dir in root.ancestors() {
        if dir.join(marker).is_dir() {
            debug!("Found {} in {}", marker, dir.display());
            return dir.join(BIN_DIR);
        }
    }

    let fallback = root.parent().unwrap_or(&root).join(BIN_DIR);
    debug!(
        "No {} directory above {}, falling back to {}",
        marker,
        root.display(),
        fallback.display()
    );
    fallback
}

/// Default install root: the directory holding the running executable
pub fn default_install_root() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}
