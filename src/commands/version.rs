//! Version command implementation
//!
//! Besides the version itself, reports the effective download configuration
//! (archive URL and cache directory) so users can see which overrides apply.

use crate::cache;
use crate::error::Result;
use crate::fetch;

/// Run version command
pub fn run() -> Result<()> {
    println!("appseed {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Configuration:");
    println!("  Archive URL: {}", fetch::archive_url());
    println!("  Cache directory: {}", cache::cache_dir()?.display());

    let stats = cache::cache_stats()?;
    if stats.present {
        println!(
            "  Cached archive: {} ({}, {} old)",
            cache::ARCHIVE_FILE,
            stats.formatted_size(),
            stats.formatted_age()
        );
    } else {
        println!("  Cached archive: none");
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use serial_test::serial;
    use tempfile::TempDir;

    use super::*;

    #[test]
    #[serial]
    fn test_archive_url_default() {
        unsafe {
            std::env::remove_var("APPSEED_ARCHIVE_URL");
        }
        assert_eq!(fetch::archive_url(), fetch::DEFAULT_ARCHIVE_URL);
    }

    #[test]
    #[serial]
    fn test_archive_url_env_override() {
        unsafe {
            std::env::set_var("APPSEED_ARCHIVE_URL", "http://mirror.example/apps.zip");
        }
        assert_eq!(fetch::archive_url(), "http://mirror.example/apps.zip");
        unsafe {
            std::env::remove_var("APPSEED_ARCHIVE_URL");
        }
    }

    #[test]
    #[serial]
    fn test_run_reports_configuration() {
        let temp = TempDir::new().expect("temp dir");
        unsafe {
            std::env::set_var("APPSEED_CACHE_DIR", temp.path());
        }

        assert!(run().is_ok());

        unsafe {
            std::env::remove_var("APPSEED_CACHE_DIR");
        }
    }
}
