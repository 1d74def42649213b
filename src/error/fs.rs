//! File system errors

use std::path::Path;

use super::AppseedError;

/// Creates a directory creation failed error
pub fn dir_create_failed(path: impl AsRef<Path>, reason: impl ToString) -> AppseedError {
    AppseedError::DirCreateFailed {
        path: path.as_ref().display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a generic IO error
pub fn io_error(message: impl Into<String>) -> AppseedError {
    AppseedError::IoError {
        message: message.into(),
    }
}
