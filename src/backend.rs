//! I/O backend abstraction
//!
//! Provides a trait for the side effects of provisioning so the
//! provisioner can be driven by a fake in tests:
//! - fetching a URL into memory
//! - creating directories and writing files
//! - marking a file executable

use std::io::{self, Read};
use std::path::Path;
use tracing::debug;

/// Largest executable accepted from a download
pub const MAX_DOWNLOAD_BYTES: u64 = 512 * 1024 * 1024;

const READ_CHUNK: usize = 64 * 1024;

/// Abstract I/O interface used by the provisioner
pub trait Backend: Send + Sync {
    /// Fetch a URL fully into memory.
    ///
    /// `progress` receives `(bytes_so_far, total_if_known)` as data arrives.
    /// Non-2xx responses are errors.
    fn fetch(&self, url: &str, progress: &mut dyn FnMut(u64, Option<u64>)) -> io::Result<Vec<u8>>;

    /// Create a directory and all missing parents
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Write a file, replacing existing contents
    fn write_file(&self, path: &Path, contents: &[u8]) -> io::Result<()>;

    /// Set the file's permission bits to 0755
    fn set_executable(&self, path: &Path) -> io::Result<()>;

    /// Check whether anything exists at a path
    fn exists(&self, path: &Path) -> bool;
}

/// Backend on a blocking `ureq` agent and `std::fs`
#[derive(Clone)]
pub struct SystemBackend {
    agent: ureq::Agent,
}

impl SystemBackend {
    /// Create a backend with a default HTTP agent
    pub fn new() -> Self {
        Self {
            agent: ureq::Agent::new_with_defaults(),
        }
    }
}

impl Default for SystemBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for SystemBackend {
    fn fetch(&self, url: &str, progress: &mut dyn FnMut(u64, Option<u64>)) -> io::Result<Vec<u8>> {
        debug!(%url, "Fetching");

        let mut response = self.agent.get(url).call().map_err(io::Error::other)?;
        let total = response.body().content_length();
        let mut reader = response
            .body_mut()
            .with_config()
            .limit(MAX_DOWNLOAD_BYTES)
            .reader();

        let mut data = Vec::with_capacity(total.unwrap_or(0).min(MAX_DOWNLOAD_BYTES) as usize);
        let mut chunk = vec![0u8; READ_CHUNK];
        loop {
            let n = reader.read(&mut chunk)?;
            if n == 0 {
                break;
            }
            data.extend_from_slice(&chunk[..n]);
            progress(data.len() as u64, total);
        }

        debug!(%url, bytes = data.len(), "Fetched");
        Ok(data)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }

    fn write_file(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        std::fs::write(path, contents)
    }

    fn set_executable(&self, path: &Path) -> io::Result<()> {
        make_executable(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// Set 0755 permissions on a file (no-op off Unix)
pub fn make_executable(path: &Path) -> io::Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let perms = std::fs::Permissions::from_mode(0o755);
        std::fs::set_permissions(path, perms)?;
    }
    #[cfg(not(unix))]
    {
        let _ = path;
    }
    Ok(())
}
