//! Platform detection and release asset lookup
//!
//! The Tailwind CSS project publishes one standalone executable per
//! supported (OS family, architecture) pair. Names follow `uname`:
//! the OS family is `Darwin`, `Linux` or `Windows`, and the architecture
//! is the machine string (`arm64` on macOS, `aarch64` on Linux).

use crate::error::{TailwindError, TailwindResult};
use std::fmt;

/// Release assets keyed by (OS family, architecture)
const RELEASE_ASSETS: &[(&str, &str, &str)] = &[
    ("Darwin", "arm64", "tailwindcss-macos-arm64"),
    ("Darwin", "x86_64", "tailwindcss-macos-x64"),
    ("Linux", "x86_64", "tailwindcss-linux-x64"),
    ("Linux", "aarch64", "tailwindcss-linux-arm64"),
    ("Windows", "x86_64", "tailwindcss-windows-x64.exe"),
];

/// An (OS family, architecture) pair
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Platform {
    pub os: String,
    pub arch: String,
}

impl Platform {
    /// Create a platform identifier from raw strings
    pub fn new(os: impl Into<String>, arch: impl Into<String>) -> Self {
        Self {
            os: os.into(),
            arch: arch.into(),
        }
    }

    /// Detect the platform this process is running on
    pub fn detect() -> Self {
        let os = match std::env::consts::OS {
            "macos" => "Darwin",
            "linux" => "Linux",
            "windows" => "Windows",
            other => other,
        };

        // macOS reports Apple Silicon as arm64, Linux keeps aarch64
        let arch = match (os, std::env::consts::ARCH) {
            ("Darwin", "aarch64") => "arm64",
            (_, other) => other,
        };

        Self::new(os, arch)
    }

    /// Release asset filename for this platform
    pub fn executable_filename(&self) -> TailwindResult<&'static str> {
        executable_filename(&self.os, &self.arch)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.os, self.arch)
    }
}

/// Look up the release asset filename for an exact (OS, arch) pair.
pub fn executable_filename(os: &str, arch: &str) -> TailwindResult<&'static str> {
    RELEASE_ASSETS
        .iter()
        .find(|(o, a, _)| *o == os && *a == arch)
        .map(|(_, _, filename)| *filename)
        .ok_or_else(|| TailwindError::UnsupportedPlatform {
            os: os.to_string(),
            arch: arch.to_string(),
        })
}
