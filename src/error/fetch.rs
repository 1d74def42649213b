//! Download and listing errors

use std::path::Path;

use super::AppseedError;

/// Creates a download failed error
pub fn download_failed(url: impl Into<String>, reason: impl ToString) -> AppseedError {
    AppseedError::DownloadFailed {
        url: url.into(),
        reason: reason.to_string(),
    }
}

/// Creates an archive read failed error
pub fn archive_read_failed(path: impl AsRef<Path>, reason: impl ToString) -> AppseedError {
    AppseedError::ArchiveReadFailed {
        path: path.as_ref().display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a listing failed error
pub fn listing_failed(reason: impl ToString) -> AppseedError {
    AppseedError::ListingFailed {
        reason: reason.to_string(),
    }
}
