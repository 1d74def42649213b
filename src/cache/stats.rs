//! Cache statistics and maintenance
//!
//! Provides size/age information about the cached archive and the
//! `cache clear` operation that removes it.

use std::fs;
use std::time::{Duration, SystemTime};

use crate::error::{AppseedError, Result};

/// Information about the cached sample apps archive
#[derive(Debug, Default)]
pub struct CacheStats {
    /// Whether a cached archive exists
    pub present: bool,
    /// Size of the archive in bytes
    pub size: u64,
    /// Time since the archive was downloaded
    pub age: Option<Duration>,
}

impl CacheStats {
    /// Format size as human-readable string
    pub fn formatted_size(&self) -> String {
        let size = self.size as f64;
        if size < 1024.0 {
            format!("{} B", self.size)
        } else if size < 1024.0 * 1024.0 {
            format!("{:.1} KB", size / 1024.0)
        } else if size < 1024.0 * 1024.0 * 1024.0 {
            format!("{:.1} MB", size / (1024.0 * 1024.0))
        } else {
            format!("{:.1} GB", size / (1024.0 * 1024.0 * 1024.0))
        }
    }

    /// Format archive age as a whole number of days or hours
    pub fn formatted_age(&self) -> String {
        match self.age {
            Some(age) => {
                let hours = age.as_secs() / 3600;
                if hours >= 24 {
                    let days = hours / 24;
                    format!("{} day{}", days, if days == 1 { "" } else { "s" })
                } else {
                    format!("{} hour{}", hours, if hours == 1 { "" } else { "s" })
                }
            }
            None => "unknown".to_string(),
        }
    }
}

/// Get statistics for the cached archive
pub fn cache_stats() -> Result<CacheStats> {
    let path = super::archive_path()?;

    let metadata = match fs::metadata(&path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(CacheStats::default());
        }
        Err(e) => {
            return Err(AppseedError::CacheOperationFailed {
                message: format!("Could not stat cache file {}: {}", path.display(), e),
            });
        }
    };

    let age = metadata
        .modified()
        .ok()
        .and_then(|modified| SystemTime::now().duration_since(modified).ok());

    Ok(CacheStats {
        present: true,
        size: metadata.len(),
        age,
    })
}

/// Remove the cached archive
pub fn clear_cache() -> Result<()> {
    let path = super::archive_path()?;
    if path.exists() {
        fs::remove_file(&path).map_err(|e| AppseedError::CacheOperationFailed {
            message: format!("Could not remove cache file {}: {}", path.display(), e),
        })?;
    }
    Ok(())
}
