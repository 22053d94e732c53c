use crate::error::Error;
use crate::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// Matches `VERSION = "<prefix><dotted version>"`, e.g. `VERSION = "ZILF 0.9"`.
///
/// Group 1 is the numeric part; any non-digit prefix is skipped.
fn version_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r#"VERSION\s*=\s*"[^"0-9]*([0-9.]+)""#).unwrap())
}

/// Extract the numeric version from source text
pub fn extract(text: &str) -> Option<String> {
    version_pattern()
        .captures(text)
        .map(|caps| caps[1].to_string())
}

/// Read the version constant out of `path`
pub fn read(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path).map_err(|source| Error::VersionFile {
        path: path.to_path_buf(),
        source,
    })?;

    extract(&text).ok_or_else(|| Error::VersionNotFound(path.to_path_buf()))
}
