use crate::error::Error;
use crate::result::Result;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use time::{Date, OffsetDateTime};

/// Walk up from `start` until a directory containing `marker` is found
pub fn find_root(start: &Path, marker: &str) -> Result<PathBuf> {
    let start = fs::canonicalize(start).map_err(|source| Error::StartPath {
        path: start.to_path_buf(),
        source,
    })?;
    let first = if start.is_dir() {
        start.as_path()
    } else {
        start.parent().unwrap_or(start.as_path())
    };

    first
        .ancestors()
        .find(|dir| dir.join(marker).is_file())
        .map(Path::to_path_buf)
        .ok_or_else(|| Error::MarkerNotFound {
            marker: marker.to_string(),
            start: start.clone(),
        })
}

/// Join a `/`-separated relative path onto `base` using native separators
pub fn join_relative(base: &Path, relative: &str) -> PathBuf {
    relative
        .split('/')
        .filter(|part| !part.is_empty())
        .fold(base.to_path_buf(), |path, part| path.join(part))
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Delete a file left over from an earlier run, if there is one
pub fn remove_stale(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Err(err) if err.kind() != ErrorKind::NotFound => Err(err.into()),
        _ => Ok(()),
    }
}

/// Today's date in the local time zone, or UTC when the offset is unknown
pub fn today() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}
