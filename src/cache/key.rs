//! Cache key derivation

use md5::{Digest, Md5};

/// MD5 of a path string, as 32 lowercase hex characters
pub fn path_key(path: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(path.as_bytes());
    hex::encode(hasher.finalize())
}
