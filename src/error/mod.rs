//! Error types and handling for appseed
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`cache`]: Cache errors
//! - [`clone`]: Clone/extraction errors
//! - [`fetch`]: Download and listing errors
//! - [`fs`]: File system errors

#![allow(dead_code)]

// Declare submodules
pub mod cache;
pub mod clone;
pub mod fetch;
pub mod fs;

// Re-export convenience constructors from submodules
#[allow(unused_imports)]
pub use cache::operation_failed as cache_operation_failed;
#[allow(unused_imports)]
pub use clone::not_found as application_not_found;
#[allow(unused_imports)]
pub use fetch::{archive_read_failed, download_failed, listing_failed};
#[allow(unused_imports)]
pub use fs::{dir_create_failed, io_error};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for appseed operations
#[derive(Error, Diagnostic, Debug)]
pub enum AppseedError {
    // Cache errors
    #[error("Cache operation failed: {message}")]
    #[diagnostic(code(appseed::cache::operation_failed))]
    CacheOperationFailed { message: String },

    // Download errors
    #[error("Could not download sample apps from {url}: {reason}")]
    #[diagnostic(
        code(appseed::fetch::download_failed),
        help("Check your network connection and retry")
    )]
    DownloadFailed { url: String, reason: String },

    #[error("Could not open sample apps archive {path}: {reason}")]
    #[diagnostic(
        code(appseed::fetch::archive_read_failed),
        help("The cached archive may be corrupt. Run 'appseed cache clear' and retry")
    )]
    ArchiveReadFailed { path: String, reason: String },

    #[error("Could not list sample applications: {reason}")]
    #[diagnostic(code(appseed::fetch::listing_failed))]
    ListingFailed { reason: String },

    // Clone errors
    #[error("Could not find sample application '{name}'")]
    #[diagnostic(
        code(appseed::clone::not_found),
        help("Retry with --force; the cached archive may predate this application")
    )]
    ApplicationNotFound { name: String },

    // File system errors
    #[error("Could not create directory {path}: {reason}")]
    #[diagnostic(code(appseed::fs::dir_create_failed))]
    DirCreateFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(appseed::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for AppseedError {
    fn from(err: std::io::Error) -> Self {
        AppseedError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, AppseedError>;
