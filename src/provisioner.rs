//! Tailwind CSS executable provisioning
//!
//! Resolves where the standalone executable lives, downloads it on first
//! use, and remembers the resolved path in a [`FileCache`] so later runs
//! skip straight to building commands.

use crate::backend::{Backend, SystemBackend};
use crate::bin_dir::{default_install_root, determine_bin_directory};
use crate::cache::{path_key, FileCache, NO_EXPIRY};
use crate::error::{TailwindError, TailwindResult};
use crate::platform::Platform;
use crate::ui::{DownloadProgress, UiContext};
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info};

/// Base URL of the latest Tailwind CSS release assets
pub const DOWNLOAD_BASE_URL: &str =
    "https://github.com/tailwindlabs/tailwindcss/releases/latest/download";

/// Name of the default cache folder under the system temp directory
pub const DEFAULT_CACHE_SUBDIR: &str = "tailwindcss-bin";

/// Download URL for a release asset
pub fn download_url(filename: &str) -> String {
    format!("{}/{}", DOWNLOAD_BASE_URL, filename)
}

/// Default cache root: `<temp dir>/tailwindcss-bin`
pub fn default_cache_dir() -> PathBuf {
    std::env::temp_dir().join(DEFAULT_CACHE_SUBDIR)
}

/// Construction options for [`Tailwind`]
#[derive(Debug, Clone, Default)]
pub struct TailwindOptions {
    /// Use this executable as-is, skipping resolution and download
    pub bin_path: Option<PathBuf>,

    /// Directory to download into, instead of resolving one
    pub bin_dir: Option<PathBuf>,

    /// Where the bin directory walk starts (defaults to the running executable's directory)
    pub install_root: Option<PathBuf>,

    /// Cache root (defaults to `<temp dir>/tailwindcss-bin`)
    pub cache_dir: Option<PathBuf>,

    /// Provision for this platform instead of the detected one
    pub platform: Option<Platform>,

    /// Report download progress on stderr
    pub show_progress: bool,
}

impl TailwindOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bin_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.bin_path = Some(path.into());
        self
    }

    pub fn bin_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.bin_dir = Some(dir.into());
        self
    }

    pub fn install_root(mut self, dir: impl Into<PathBuf>) -> Self {
        self.install_root = Some(dir.into());
        self
    }

    pub fn cache_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = Some(dir.into());
        self
    }

    pub fn platform(mut self, platform: Platform) -> Self {
        self.platform = Some(platform);
        self
    }

    pub fn show_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }
}

/// Provisioner for the Tailwind CSS standalone executable
pub struct Tailwind {
    bin_path: PathBuf,
    /// `None` when constructed with an explicit executable path
    bin_dir: Option<PathBuf>,
    platform: Platform,
    cache: FileCache,
    backend: Box<dyn Backend>,
    ui: Option<UiContext>,
}

impl Tailwind {
    /// Resolve or download the executable with default options
    pub fn new() -> TailwindResult<Self> {
        Self::with_options(TailwindOptions::default())
    }

    /// Wrap an existing executable without touching disk or network
    pub fn with_bin_path(path: impl Into<PathBuf>) -> Self {
        Self::explicit(
            path.into(),
            None,
            Box::new(SystemBackend::new()),
            Platform::detect(),
        )
    }

    /// Construct with options and the system backend
    pub fn with_options(options: TailwindOptions) -> TailwindResult<Self> {
        Self::with_backend(options, Box::new(SystemBackend::new()))
    }

    /// Construct with options and a custom backend.
    ///
    /// Without an explicit `bin_path` this resolves the bin directory,
    /// opens the cache and downloads the executable if it is missing.
    pub fn with_backend(options: TailwindOptions, backend: Box<dyn Backend>) -> TailwindResult<Self> {
        let platform = options.platform.unwrap_or_else(Platform::detect);

        if let Some(bin_path) = options.bin_path {
            debug!("Using explicit executable {}", bin_path.display());
            return Ok(Self::explicit(bin_path, options.cache_dir, backend, platform));
        }

        let bin_dir = match options.bin_dir {
            Some(dir) => dir,
            None => {
                let root = options.install_root.unwrap_or_else(default_install_root);
                determine_bin_directory(&root)
            }
        };
        debug!("Bin directory: {}", bin_dir.display());

        let cache = FileCache::open(options.cache_dir.unwrap_or_else(default_cache_dir))?;

        let mut tailwind = Self {
            bin_path: PathBuf::new(),
            bin_dir: Some(bin_dir),
            platform,
            cache,
            backend,
            ui: options.show_progress.then(UiContext::detect),
        };
        tailwind.bin_path = tailwind.get_or_download_executable()?;

        Ok(tailwind)
    }

    fn explicit(
        bin_path: PathBuf,
        cache_dir: Option<PathBuf>,
        backend: Box<dyn Backend>,
        platform: Platform,
    ) -> Self {
        // The cache directory is recorded but never created here
        let cache = FileCache::unopened(cache_dir.unwrap_or_else(default_cache_dir));
        Self {
            bin_path,
            bin_dir: None,
            platform,
            cache,
            backend,
            ui: None,
        }
    }

    /// Return the cached executable path, downloading the executable on a miss.
    ///
    /// A cache hit is trusted without checking the file still exists.
    pub fn get_or_download_executable(&self) -> TailwindResult<PathBuf> {
        let Some(ref bin_dir) = self.bin_dir else {
            return Ok(self.bin_path.clone());
        };

        let filename = self.platform.executable_filename()?;
        let path = bin_dir.join(filename);

        // Entries hold the exact path string; a non-UTF-8 path has none
        let Some(path_str) = path.to_str() else {
            debug!("{} is not valid UTF-8, bypassing cache", path.display());
            if !self.backend.exists(&path) {
                self.download_executable(filename, &path)?;
            }
            return Ok(path);
        };
        let key = path_key(path_str);

        if let Some(cached) = self.cache.get(&key)? {
            debug!("Cache hit for {}", cached);
            return Ok(PathBuf::from(cached));
        }

        debug!("Cache miss for {}", path_str);
        if !self.backend.exists(&path) {
            self.download_executable(filename, &path)?;
        }

        self.cache.set(&key, path_str, NO_EXPIRY)?;
        Ok(path)
    }

    /// Download a release asset to `path` and mark it executable
    pub fn download_executable(&self, filename: &str, path: &Path) -> TailwindResult<()> {
        let url = download_url(filename);

        if let Some(dir) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !self.backend.exists(dir) {
                debug!("Creating {}", dir.display());
                self.backend
                    .create_dir_all(dir)
                    .map_err(|e| TailwindError::DirectoryCreationFailed {
                        path: dir.to_path_buf(),
                        source: e,
                    })?;
            }
        }

        info!("Downloading {} from {}", filename, url);
        let progress = DownloadProgress::new(self.ui.as_ref(), filename);
        let content = self
            .backend
            .fetch(&url, &mut |downloaded: u64, total: Option<u64>| {
                progress.update(downloaded, total)
            })
            .map_err(|e| {
                progress.abandon();
                TailwindError::DownloadFailed {
                    url: url.clone(),
                    reason: e.to_string(),
                }
            })?;
        progress.finish(content.len() as u64);

        self.backend
            .write_file(path, &content)
            .map_err(|e| TailwindError::WriteFailed {
                path: path.to_path_buf(),
                source: e,
            })?;

        self.backend.set_executable(path).map_err(|e| {
            TailwindError::io(format!("setting permissions on {}", path.display()), e)
        })?;

        info!("Installed {} ({} bytes)", path.display(), content.len());
        Ok(())
    }

    /// Arguments that run the executable in watch mode
    pub fn watch_command(&self, input: impl AsRef<OsStr>, output: impl AsRef<OsStr>) -> Vec<OsString> {
        let mut args = self.io_args(input.as_ref(), output.as_ref());
        args.push("--watch".into());
        args
    }

    /// Arguments that run a single build, optionally minified
    pub fn build_command(
        &self,
        input: impl AsRef<OsStr>,
        output: impl AsRef<OsStr>,
        minify: bool,
    ) -> Vec<OsString> {
        let mut args = self.io_args(input.as_ref(), output.as_ref());
        if minify {
            args.push("--minify".into());
        }
        args
    }

    fn io_args(&self, input: &OsStr, output: &OsStr) -> Vec<OsString> {
        vec![
            self.bin_path.clone().into_os_string(),
            "-i".into(),
            input.to_os_string(),
            "-o".into(),
            output.to_os_string(),
        ]
    }

    /// Path of the executable
    pub fn bin_path(&self) -> &Path {
        &self.bin_path
    }

    /// Resolved bin directory, `None` for an explicit executable
    pub fn bin_dir(&self) -> Option<&Path> {
        self.bin_dir.as_deref()
    }

    /// Platform the executable was provisioned for
    pub fn platform(&self) -> &Platform {
        &self.platform
    }

    /// Configured cache root
    pub fn cache_dir(&self) -> &Path {
        self.cache.dir()
    }

    /// Remove all cache entries, returning how many were removed.
    ///
    /// Downloaded executables are left in place.
    pub fn clear_cache(&self) -> TailwindResult<usize> {
        let removed = self.cache.clear()?;
        info!("Cleared {} cache entries in {}", removed, self.cache.dir().display());
        Ok(removed)
    }
}

/// Turn an argument vector into an unspawned process command
pub fn to_process(args: &[OsString]) -> Option<Command> {
    let (program, rest) = args.split_first()?;
    let mut command = Command::new(program);
    command.args(rest);
    Some(command)
}
