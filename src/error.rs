//! Error types for tailwindcss-bin
//!
//! All modules use `TailwindResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for tailwindcss-bin operations
pub type TailwindResult<T> = Result<T, TailwindError>;

/// All errors that can occur while provisioning the executable
#[derive(Error, Debug)]
pub enum TailwindError {
    // Provisioning errors
    #[error("Unsupported OS/architecture: {os} {arch}")]
    UnsupportedPlatform { os: String, arch: String },

    #[error("Failed to create directory {path}: {source}")]
    DirectoryCreationFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to download Tailwind CSS executable from {url}: {reason}")]
    DownloadFailed { url: String, reason: String },

    #[error("Failed to write Tailwind CSS executable to {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Argument is not valid UTF-8: {0}")]
    NonUtf8Argument(String),

    // Cache errors
    #[error("Invalid cache key: {0:?}")]
    CacheKeyInvalid(String),

    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl TailwindError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::UnsupportedPlatform { .. } => {
                Some("Pass --bin-path with a Tailwind CSS executable built for this machine")
            }
            Self::DownloadFailed { .. } => {
                Some("Check network access to github.com, or pass --bin-path")
            }
            Self::DirectoryCreationFailed { .. } | Self::WriteFailed { .. } => {
                Some("Pass --bin-dir with a writable directory")
            }
            Self::NonUtf8Argument(_) => Some("Use --format plain to print raw path bytes"),
            _ => None,
        }
    }
}
