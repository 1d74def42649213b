//! Sample apps archive cache
//!
//! The cache holds a single file, the downloaded sample-apps zip archive:
//!
//! ```text
//! ~/.cache/appseed/
//! └── sample-apps-master.zip
//! ```
//!
//! The archive is considered fresh for seven days after download and is
//! replaced in place (atomic rename) when stale or when a refresh is forced.

use std::path::PathBuf;

use crate::error::{AppseedError, Result};

pub mod stats;

pub use stats::{CacheStats, cache_stats, clear_cache};

/// Default cache directory name under user's cache directory
const CACHE_DIR: &str = "appseed";

/// File name of the cached sample apps archive
pub const ARCHIVE_FILE: &str = "sample-apps-master.zip";

/// Get the cache directory path
///
/// Uses the platform's standard cache location (e.g. XDG on Linux, Library/Caches on macOS)
/// with an `appseed` subdirectory. Can be overridden with the `APPSEED_CACHE_DIR`
/// environment variable.
pub fn cache_dir() -> Result<PathBuf> {
    if let Ok(cache_dir) = std::env::var("APPSEED_CACHE_DIR") {
        return Ok(PathBuf::from(cache_dir));
    }

    let base = dirs::cache_dir().ok_or_else(|| AppseedError::CacheOperationFailed {
        message: "Could not determine cache directory".to_string(),
    })?;

    Ok(base.join(CACHE_DIR))
}

/// Path to the cached sample apps archive
pub fn archive_path() -> Result<PathBuf> {
    Ok(cache_dir()?.join(ARCHIVE_FILE))
}
