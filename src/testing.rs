//! Fixtures shared by the unit tests.

use crate::result::Result;
use crate::utils;
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;
use zip::ZipArchive;

/// Write `content` at a `/`-separated path under `root`, creating parents
pub fn write(root: &Path, relative: &str, content: &str) -> Result<()> {
    let path = utils::join_relative(root, relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

/// Every `(name, text)` pair in the archive, in stored order
pub fn archive_entries(path: &Path) -> Result<Vec<(String, String)>> {
    let mut archive = ZipArchive::new(File::open(path)?)?;
    let mut entries = Vec::new();
    for i in 0..archive.len() {
        let mut file = archive.by_index(i)?;
        let mut text = String::new();
        file.read_to_string(&mut text)?;
        entries.push((file.name().to_string(), text));
    }
    Ok(entries)
}

pub fn archive_names(path: &Path) -> Result<Vec<String>> {
    Ok(archive_entries(path)?.into_iter().map(|(name, _)| name).collect())
}
