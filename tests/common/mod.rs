//! Common test utilities for appseed integration tests

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// Unroutable archive URL: nothing listens on the discard port locally, so a
/// test that reaches the network fails fast instead of hanging.
pub const UNREACHABLE_ARCHIVE_URL: &str = "http://127.0.0.1:9/sample-apps.zip";

/// File name of the cached archive, mirroring the binary's cache layout
pub const ARCHIVE_FILE: &str = "sample-apps-master.zip";

/// Archive root folder used by the fixtures
pub const ARCHIVE_ROOT: &str = "sample-apps-master";

/// An isolated cache/work directory pair for one test
#[allow(dead_code)]
pub struct TestEnv {
    /// Temporary directory holding everything
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Cache directory passed via APPSEED_CACHE_DIR
    pub cache_dir: PathBuf,
    /// Working directory the command runs in
    pub work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new isolated test environment
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let cache_dir = temp.path().join("cache");
        let work_dir = temp.path().join("work");
        std::fs::create_dir_all(&cache_dir).expect("Failed to create cache directory");
        std::fs::create_dir_all(&work_dir).expect("Failed to create work directory");
        Self {
            temp,
            cache_dir,
            work_dir,
        }
    }

    /// Build an appseed command wired to this environment
    ///
    /// The archive URL points at an unreachable address, so any code path that
    /// tries to download fails deterministically without touching the network.
    pub fn cmd(&self) -> Command {
        // Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("appseed").expect("appseed binary should build");
        cmd.current_dir(&self.work_dir);
        cmd.env("APPSEED_CACHE_DIR", &self.cache_dir);
        cmd.env("APPSEED_ARCHIVE_URL", UNREACHABLE_ARCHIVE_URL);
        cmd
    }

    /// Write a fresh sample-apps archive fixture into the cache directory
    ///
    /// Layout:
    /// ```text
    /// sample-apps-master/
    /// ├── README.md
    /// └── album-recommendation/
    ///     ├── README.md
    ///     ├── bin/deploy.sh        (mode 755)
    ///     └── src/main/application/services.xml
    /// ```
    pub fn write_archive_fixture(&self) {
        let file =
            File::create(self.cache_dir.join(ARCHIVE_FILE)).expect("Failed to create archive");
        let mut writer = zip::ZipWriter::new(file);
        let options = zip::write::FileOptions::default();
        let executable = zip::write::FileOptions::default().unix_permissions(0o755);

        writer
            .add_directory(format!("{ARCHIVE_ROOT}/"), options)
            .expect("Failed to add directory");
        writer
            .start_file(format!("{ARCHIVE_ROOT}/README.md"), options)
            .expect("Failed to start file");
        writer
            .write_all(b"# Sample apps\n")
            .expect("Failed to write file");

        writer
            .add_directory(format!("{ARCHIVE_ROOT}/album-recommendation/"), options)
            .expect("Failed to add directory");
        writer
            .start_file(format!("{ARCHIVE_ROOT}/album-recommendation/README.md"), options)
            .expect("Failed to start file");
        writer
            .write_all(b"# Album recommendation\n")
            .expect("Failed to write file");

        writer
            .add_directory(format!("{ARCHIVE_ROOT}/album-recommendation/bin/"), options)
            .expect("Failed to add directory");
        writer
            .start_file(
                format!("{ARCHIVE_ROOT}/album-recommendation/bin/deploy.sh"),
                executable,
            )
            .expect("Failed to start file");
        writer
            .write_all(b"#!/bin/sh\necho deploy\n")
            .expect("Failed to write file");

        writer
            .add_directory(format!("{ARCHIVE_ROOT}/album-recommendation/src/"), options)
            .expect("Failed to add directory");
        writer
            .add_directory(
                format!("{ARCHIVE_ROOT}/album-recommendation/src/main/"),
                options,
            )
            .expect("Failed to add directory");
        writer
            .add_directory(
                format!("{ARCHIVE_ROOT}/album-recommendation/src/main/application/"),
                options,
            )
            .expect("Failed to add directory");
        writer
            .start_file(
                format!("{ARCHIVE_ROOT}/album-recommendation/src/main/application/services.xml"),
                options,
            )
            .expect("Failed to start file");
        writer
            .write_all(b"<services version=\"1.0\"/>\n")
            .expect("Failed to write file");

        writer.finish().expect("Failed to finish archive");
    }

    /// Backdate the cached archive's modification time by `age`
    pub fn age_cached_archive(&self, age: std::time::Duration) {
        let file = File::options()
            .write(true)
            .open(self.cache_dir.join(ARCHIVE_FILE))
            .expect("Failed to open archive");
        file.set_modified(std::time::SystemTime::now() - age)
            .expect("Failed to set archive mtime");
    }

    /// Read a file from the working directory
    pub fn read_work_file(&self, path: &str) -> Vec<u8> {
        std::fs::read(self.work_dir.join(path)).expect("Failed to read file")
    }

    /// Check if a path exists in the working directory
    pub fn work_path_exists(&self, path: &str) -> bool {
        self.work_dir.join(path).exists()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
