//! Selective extraction of one application out of the sample apps archive
//!
//! Extraction is an explicit two-phase operation: first a scan over entry
//! names decides whether the requested application exists at all, then the
//! destination directory is created and matching entries are copied. The
//! destination is never created for an application that is not in the archive.
//!
//! There is no rollback: the first copy error aborts and leaves whatever was
//! already extracted in place.

use std::fs::{self, File};
use std::io::{self, Read, Seek};
use std::path::{Path, PathBuf};

use zip::ZipArchive;

use crate::error::{self, Result};

use super::ARCHIVE_ROOT;

/// Extract all entries of `application` into `destination`
///
/// `destination` must not exist yet; it is created once the application is
/// known to be present in the archive.
pub fn extract_application<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    application: &str,
    destination: &Path,
) -> Result<()> {
    let prefix = format!("{}/{}/", ARCHIVE_ROOT, application);

    // Phase one: existence scan over entry names only
    let found = archive.file_names().any(|name| name.starts_with(&prefix));
    if !found {
        return Err(error::application_not_found(application));
    }

    // Phase two: create the destination, then copy matching entries
    fs::create_dir(destination).map_err(|e| error::dir_create_failed(destination, e))?;

    for index in 0..archive.len() {
        let mut entry = archive
            .by_index(index)
            .map_err(|e| error::archive_read_failed(format!("entry #{}", index), e))?;
        let name = entry.name().to_string();
        if !name.starts_with(&prefix) {
            continue;
        }
        copy_entry(&mut entry, &name, &prefix, destination)?;
    }

    Ok(())
}

/// Copy a single archive entry below `destination`
fn copy_entry(
    entry: &mut zip::read::ZipFile<'_>,
    name: &str,
    prefix: &str,
    destination: &Path,
) -> Result<()> {
    let target = entry_destination(name, prefix, destination)?;

    if name.ends_with('/') {
        // The prefix entry is the destination itself, already created
        if name != prefix {
            fs::create_dir(&target).map_err(|e| error::dir_create_failed(&target, e))?;
        }
        return Ok(());
    }

    let mut output = File::create(&target).map_err(|e| {
        error::io_error(format!("Could not create file {}: {}", target.display(), e))
    })?;
    io::copy(entry, &mut output)
        .map_err(|e| error::io_error(format!("Could not copy zip entry '{}': {}", name, e)))?;

    #[cfg(unix)]
    if let Some(mode) = entry.unix_mode() {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&target, fs::Permissions::from_mode(mode)).map_err(|e| {
            error::io_error(format!(
                "Could not set permissions on {}: {}",
                target.display(),
                e
            ))
        })?;
    }

    Ok(())
}

/// Map an entry name to its path below the destination directory
///
/// Strips the application prefix and rebuilds the remainder component by
/// component, converting the archive's `/` separators to the host convention.
/// Entries with `..` components are rejected so a crafted archive cannot
/// write outside the destination.
fn entry_destination(name: &str, prefix: &str, destination: &Path) -> Result<PathBuf> {
    let relative = name.strip_prefix(prefix).unwrap_or(name);
    let mut path = destination.to_path_buf();
    for component in relative.split('/').filter(|c| !c.is_empty() && *c != ".") {
        if component == ".." {
            return Err(error::io_error(format!(
                "Refusing to extract zip entry '{}': path escapes the destination directory",
                name
            )));
        }
        path.push(component);
    }
    Ok(path)
}
