//! Filesystem-backed cache for resolved executable paths
//!
//! The cache is a memoized existence marker: each entry maps the MD5 of
//! a bin path to the bin path itself, so a later run can skip the disk
//! check and download step entirely.
//!
//! # Entry Lifetime
//!
//! | TTL | Meaning |
//! |-----|---------|
//! | `0` | Never expires |
//! | `n` | Expires `n` after being written, then reads as a miss |
//!
//! Clearing the cache only removes entry files, never the executable
//! they point to.

pub mod key;
pub mod store;

pub use key::path_key;
pub use store::{CacheEntry, FileCache, NO_EXPIRY};
