//! Sample apps archive fetching
//!
//! [`SampleAppFetcher`] resolves the cached sample-apps zip archive, downloading
//! it from GitHub when the cache is missing, stale, empty, or bypassed with a
//! forced refresh. The download streams into a temporary file next to the cache
//! path and is atomically renamed into place, so a failed download never
//! clobbers a previously valid cache file.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use console::Style;
use zip::ZipArchive;

use crate::cache;
use crate::error::{self, Result};
use crate::progress;

pub mod extract;
pub mod listing;

/// Fixed URL of the sample apps archive (master branch zip)
pub const DEFAULT_ARCHIVE_URL: &str =
    "https://github.com/vespa-engine/sample-apps/archive/refs/heads/master.zip";

/// Top-level folder name inside the archive, prefixing every entry
pub const ARCHIVE_ROOT: &str = "sample-apps-master";

/// Freshness window after which a cached archive is considered stale
const CACHE_MAX_AGE: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// Overall timeout for the archive download; generous because the archive is large
const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(60 * 60);

/// Fetches and opens the sample apps archive, caching it on disk
pub struct SampleAppFetcher {
    archive_url: String,
    cache_dir: PathBuf,
}

impl SampleAppFetcher {
    /// Create a fetcher with an explicit archive URL and cache directory
    pub fn new(archive_url: impl Into<String>, cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            archive_url: archive_url.into(),
            cache_dir: cache_dir.into(),
        }
    }

    /// Create a fetcher from the environment
    ///
    /// The cache directory honors `APPSEED_CACHE_DIR`; the archive URL can be
    /// pointed at a mirror with `APPSEED_ARCHIVE_URL`.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(archive_url(), cache::cache_dir()?))
    }

    /// Path of the cached archive inside this fetcher's cache directory
    pub fn archive_path(&self) -> PathBuf {
        self.cache_dir.join(cache::ARCHIVE_FILE)
    }

    /// Open the sample apps archive, fetching it first unless a valid cached
    /// copy exists and `force_refresh` is false
    pub fn open_archive(&self, force_refresh: bool) -> Result<ZipArchive<File>> {
        let path = self.archive_path();

        if !force_refresh {
            match fs::metadata(&path) {
                Ok(metadata) => {
                    let modified = metadata.modified().map_err(|e| {
                        error::cache_operation_failed(format!(
                            "Could not read modification time of {}: {}",
                            path.display(),
                            e
                        ))
                    })?;
                    if cache_is_valid(metadata.len(), modified, SystemTime::now()) {
                        eprintln!(
                            "{}",
                            Style::new().yellow().apply_to("Using cached sample apps ...")
                        );
                        return open_zip(&path);
                    }
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => {
                    return Err(error::cache_operation_failed(format!(
                        "Could not stat cache file {}: {}",
                        path.display(),
                        e
                    )));
                }
            }
        }

        self.fetch_archive(&path)?;
        open_zip(&path)
    }

    /// Clone `application` out of the archive into `destination`
    pub fn clone_application(
        &self,
        application: &str,
        destination: &Path,
        force_refresh: bool,
    ) -> Result<()> {
        let mut archive = self.open_archive(force_refresh)?;
        extract::extract_application(&mut archive, application, destination)
    }

    /// Download the archive to a temp file in the cache directory and atomically
    /// rename it over `destination`
    fn fetch_archive(&self, destination: &Path) -> Result<()> {
        fs::create_dir_all(&self.cache_dir).map_err(|e| {
            error::cache_operation_failed(format!(
                "Could not create cache directory {}: {}",
                self.cache_dir.display(),
                e
            ))
        })?;

        // Same directory as the final path so the rename stays on one filesystem
        let mut temp = tempfile::NamedTempFile::new_in(&self.cache_dir).map_err(|e| {
            error::cache_operation_failed(format!(
                "Could not create temporary file in {}: {}",
                self.cache_dir.display(),
                e
            ))
        })?;

        progress::with_spinner("Downloading sample apps ...", || {
            let client = reqwest::blocking::Client::builder()
                .timeout(DOWNLOAD_TIMEOUT)
                .build()
                .map_err(|e| error::download_failed(&self.archive_url, e))?;

            let mut response = client
                .get(&self.archive_url)
                .send()
                .map_err(|e| error::download_failed(&self.archive_url, e))?;

            if response.status() != reqwest::StatusCode::OK {
                return Err(error::download_failed(
                    &self.archive_url,
                    format!("server returned status {}", response.status()),
                ));
            }

            io::copy(&mut response, temp.as_file_mut()).map_err(|e| {
                error::download_failed(
                    &self.archive_url,
                    format!("could not write response body: {}", e),
                )
            })?;

            Ok(())
        })?;

        temp.persist(destination).map_err(|e| {
            error::cache_operation_failed(format!(
                "Could not move downloaded archive to {}: {}",
                destination.display(),
                e
            ))
        })?;

        Ok(())
    }
}

/// The archive URL downloads use, honoring the `APPSEED_ARCHIVE_URL` override
pub fn archive_url() -> String {
    std::env::var("APPSEED_ARCHIVE_URL").unwrap_or_else(|_| DEFAULT_ARCHIVE_URL.to_string())
}

/// Cache validity rule: nonzero size and younger than the freshness window
pub(crate) fn cache_is_valid(size: u64, modified: SystemTime, now: SystemTime) -> bool {
    size > 0 && now < modified + CACHE_MAX_AGE
}

fn open_zip(path: &Path) -> Result<ZipArchive<File>> {
    let file = File::open(path).map_err(|e| {
        error::cache_operation_failed(format!("Could not open cache file {}: {}", path.display(), e))
    })?;
    ZipArchive::new(file).map_err(|e| error::archive_read_failed(path, e))
}
