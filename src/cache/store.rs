//! JSON entry files with optional expiry

use crate::error::{TailwindError, TailwindResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// TTL that keeps an entry until the cache is cleared
pub const NO_EXPIRY: Duration = Duration::ZERO;

/// A single cached value
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    /// The cached value
    pub value: String,

    /// When the entry stops being served, `None` for never
    pub expires_at: Option<DateTime<Utc>>,
}

impl CacheEntry {
    /// Create an entry that lives for `ttl` (zero means forever)
    pub fn new(value: impl Into<String>, ttl: Duration) -> Self {
        let expires_at = if ttl.is_zero() {
            None
        } else {
            chrono::Duration::from_std(ttl)
                .ok()
                .and_then(|ttl| Utc::now().checked_add_signed(ttl))
        };

        Self {
            value: value.into(),
            expires_at,
        }
    }

    /// Check if the entry has expired
    pub fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|at| Utc::now() >= at)
    }
}

/// Key/value store rooted at a directory, one `<key>.json` file per entry
#[derive(Debug, Clone)]
pub struct FileCache {
    cache_dir: PathBuf,
}

impl FileCache {
    /// Open the cache, creating its directory if needed
    pub fn open(cache_dir: impl Into<PathBuf>) -> TailwindResult<Self> {
        let cache_dir = cache_dir.into();
        fs::create_dir_all(&cache_dir).map_err(|e| {
            TailwindError::io(format!("creating cache directory {}", cache_dir.display()), e)
        })?;

        Ok(Self { cache_dir })
    }

    /// Refer to a cache directory without creating it.
    ///
    /// Reads and clears work on a missing directory; writes fail.
    pub fn unopened(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
        }
    }

    /// The cache root directory
    pub fn dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Get a cached value if present and not expired
    pub fn get(&self, key: &str) -> TailwindResult<Option<String>> {
        let path = self.entry_path(key)?;

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(TailwindError::io(
                    format!("reading cache entry {}", path.display()),
                    e,
                ))
            }
        };

        let entry: CacheEntry = match serde_json::from_str(&content) {
            Ok(entry) => entry,
            Err(e) => {
                debug!("Ignoring unreadable cache entry {}: {}", key, e);
                return Ok(None);
            }
        };

        if entry.is_expired() {
            debug!("Cache entry {} is expired", key);
            self.remove(key)?;
            return Ok(None);
        }

        Ok(Some(entry.value))
    }

    /// Store a value, replacing any previous entry for the key
    pub fn set(&self, key: &str, value: &str, ttl: Duration) -> TailwindResult<()> {
        let path = self.entry_path(key)?;
        let entry = CacheEntry::new(value, ttl);
        let content = serde_json::to_string_pretty(&entry)?;

        fs::write(&path, content).map_err(|e| {
            TailwindError::io(format!("writing cache entry {}", path.display()), e)
        })?;

        debug!("Cached {} => {}", key, value);
        Ok(())
    }

    /// Remove a single entry
    pub fn remove(&self, key: &str) -> TailwindResult<()> {
        let path = self.entry_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(TailwindError::io(
                format!("removing cache entry {}", path.display()),
                e,
            )),
        }
    }

    /// Remove every entry, returning how many were removed.
    ///
    /// Only `.json` entry files are touched.
    pub fn clear(&self) -> TailwindResult<usize> {
        let entries = match fs::read_dir(&self.cache_dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(TailwindError::io("reading cache directory", e)),
        };

        let mut removed = 0;
        for entry in entries {
            let entry = entry.map_err(|e| TailwindError::io("reading cache entry", e))?;
            let path = entry.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
                fs::remove_file(&path).map_err(|e| {
                    TailwindError::io(format!("removing cache entry {}", path.display()), e)
                })?;
                removed += 1;
            }
        }

        debug!("Removed {} cache entries from {}", removed, self.cache_dir.display());
        Ok(removed)
    }

    fn entry_path(&self, key: &str) -> TailwindResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(TailwindError::CacheKeyInvalid(key.to_string()));
        }
        Ok(self.cache_dir.join(format!("{}.json", key)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_cache() -> (FileCache, TempDir) {
        let temp = TempDir::new().unwrap();
        let cache = FileCache::open(temp.path().join("cache")).unwrap();
        (cache, temp)
    }

    #[test]
    fn open_creates_directory() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("nested").join("cache");
        let cache = FileCache::open(&dir).unwrap();
        assert!(dir.is_dir());
        assert_eq!(cache.dir(), dir);
    }

    #[test]
    fn set_and_get() {
        let (cache, _temp) = test_cache();
        cache.set("abc123", "/opt/bin/tailwindcss", NO_EXPIRY).unwrap();
        assert_eq!(
            cache.get("abc123").unwrap().as_deref(),
            Some("/opt/bin/tailwindcss")
        );
    }

    #[test]
    fn missing_returns_none() {
        let (cache, _temp) = test_cache();
        assert!(cache.get("nonexistent").unwrap().is_none());
    }

    #[test]
    fn zero_ttl_never_expires() {
        let entry = CacheEntry::new("value", NO_EXPIRY);
        assert!(entry.expires_at.is_none());
        assert!(!entry.is_expired());
    }

    #[test]
    fn expired_entry_is_a_miss_and_removed() {
        let (cache, _temp) = test_cache();
        let entry = CacheEntry {
            value: "stale".to_string(),
            expires_at: Some(Utc::now() - chrono::Duration::hours(1)),
        };
        let path = cache.dir().join("old.json");
        fs::write(&path, serde_json::to_string(&entry).unwrap()).unwrap();

        assert!(cache.get("old").unwrap().is_none());
        assert!(!path.exists());
    }

    #[test]
    fn live_ttl_entry_is_served() {
        let (cache, _temp) = test_cache();
        cache.set("fresh", "value", Duration::from_secs(3600)).unwrap();
        assert_eq!(cache.get("fresh").unwrap().as_deref(), Some("value"));
    }

    #[test]
    fn corrupt_entry_is_a_miss() {
        let (cache, _temp) = test_cache();
        fs::write(cache.dir().join("broken.json"), "not json").unwrap();
        assert!(cache.get("broken").unwrap().is_none());
    }

    #[test]
    fn invalid_keys_rejected() {
        let (cache, _temp) = test_cache();
        for key in ["", "../escape", "a/b", "with space"] {
            assert!(matches!(
                cache.set(key, "v", NO_EXPIRY),
                Err(TailwindError::CacheKeyInvalid(_))
            ));
        }
    }

    #[test]
    fn clear_only_removes_entries() {
        let (cache, _temp) = test_cache();
        cache.set("one", "1", NO_EXPIRY).unwrap();
        cache.set("two", "2", NO_EXPIRY).unwrap();
        let bystander = cache.dir().join("tailwindcss-linux-x64");
        fs::write(&bystander, b"binary").unwrap();

        assert_eq!(cache.clear().unwrap(), 2);
        assert!(cache.get("one").unwrap().is_none());
        assert!(cache.get("two").unwrap().is_none());
        assert!(bystander.exists());
    }

    #[test]
    fn unopened_reads_as_empty() {
        let temp = TempDir::new().unwrap();
        let cache = FileCache::unopened(temp.path().join("absent"));
        assert!(cache.get("key").unwrap().is_none());
        assert_eq!(cache.clear().unwrap(), 0);
        assert!(!temp.path().join("absent").exists());
    }

    #[test]
    fn clear_missing_directory() {
        let (cache, temp) = test_cache();
        fs::remove_dir_all(temp.path().join("cache")).unwrap();
        assert_eq!(cache.clear().unwrap(), 0);
    }
}
