//! Clone errors

use super::AppseedError;

/// Creates an error for a sample application missing from the archive
pub fn not_found(name: impl Into<String>) -> AppseedError {
    AppseedError::ApplicationNotFound { name: name.into() }
}
