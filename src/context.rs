use crate::manifest::Manifest;
use crate::result::Result;
use crate::utils;
use std::path::{Path, PathBuf};

/// State shared by every packaging stage
#[derive(Clone, Debug)]
pub struct Context {
    /// Print resolved paths and summaries
    pub verbose: bool,

    /// Solution root (directory holding the marker file)
    pub root_dir: PathBuf,
}

impl Context {
    pub fn new(root_dir: PathBuf, verbose: bool) -> Self {
        Self { verbose, root_dir }
    }

    /// Resolve the solution root by walking up from `start` until the
    /// manifest's marker file is found.
    pub fn discover(start: &Path, manifest: &Manifest, verbose: bool) -> Result<Self> {
        let root_dir = utils::find_root(start, &manifest.marker)?;
        Ok(Self::new(root_dir, verbose))
    }

    /// Join a `/`-separated relative path onto the root.
    pub fn resolve(&self, relative: &str) -> PathBuf {
        utils::join_relative(&self.root_dir, relative)
    }
}
