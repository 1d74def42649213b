//! Cache errors

use super::AppseedError;

/// Creates a cache operation failed error
pub fn operation_failed(message: impl Into<String>) -> AppseedError {
    AppseedError::CacheOperationFailed {
        message: message.into(),
    }
}
