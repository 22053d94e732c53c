use crate::error::Error;
use crate::manifest::{BuildOutput, Entry};
use crate::result::Result;
use crate::utils;
use glob::{MatchOptions, Pattern};
use std::collections::HashSet;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

const GLOB_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// An open release archive. Every write goes through here so that each
/// destination name is written at most once per session.
pub struct Archiver {
    zip: ZipWriter<File>,
    root: PathBuf,
    build_output: BuildOutput,
    added: HashSet<String>,
    written: usize,
}

impl Archiver {
    pub fn create(archive_path: &Path, root: &Path, build_output: &BuildOutput) -> Result<Self> {
        let file = File::create(archive_path)?;
        Ok(Self {
            zip: ZipWriter::new(file),
            root: root.to_path_buf(),
            build_output: build_output.clone(),
            added: HashSet::new(),
            written: 0,
        })
    }

    /// Create an archive, run `f` against it and finalize it whether or not
    /// `f` succeeds. Returns the number of entries written.
    pub fn scoped<F>(
        archive_path: &Path,
        root: &Path,
        build_output: &BuildOutput,
        f: F,
    ) -> Result<usize>
    where
        F: FnOnce(&mut Archiver) -> Result<()>,
    {
        let mut archiver = Self::create(archive_path, root, build_output)?;
        let outcome = f(&mut archiver);
        let finished = archiver.finish();
        outcome?;
        finished
    }

    /// Flush the central directory and close the file
    pub fn finish(self) -> Result<usize> {
        self.zip.finish()?;
        Ok(self.written)
    }

    pub fn add(&mut self, entry: &Entry) -> Result<()> {
        match entry {
            Entry::Static { dest, source } => self.add_static(dest, source),
            Entry::Output { dest, project } => self.add_project_output(dest, project),
            Entry::Glob { dest, pattern } => self.add_glob(dest, pattern),
        }
    }

    pub fn add_static(&mut self, dest: &str, source: &str) -> Result<()> {
        let src = utils::join_relative(&self.root, source);
        let dest = resolve_dest(dest, &src)?;
        self.add_file(&src, dest)
    }

    /// Add the binaries of `project`'s build output directory
    pub fn add_project_output(&mut self, dest: &str, project: &str) -> Result<()> {
        let project_dir = utils::join_relative(&self.root, project);
        let bin_dir = utils::join_relative(&project_dir, &self.build_output.layout);
        if !bin_dir.is_dir() {
            return Err(Error::MissingBuildOutput(bin_dir));
        }

        let extensions = self.build_output.extensions.clone();
        for extension in &extensions {
            let walker = WalkDir::new(&bin_dir)
                .min_depth(1)
                .max_depth(1)
                .sort_by_file_name();

            for entry in walker {
                let entry = entry?;
                let matches = entry
                    .path()
                    .extension()
                    .is_some_and(|ext| ext == extension.as_str());
                // follows symlinks, like the glob scan
                if matches && entry.path().is_file() {
                    let this_dest = resolve_dest(dest, entry.path())?;
                    self.add_file(entry.path(), this_dest)?;
                }
            }
        }

        Ok(())
    }

    /// Add every file matching a root-relative glob; `**` recurses
    pub fn add_glob(&mut self, dest: &str, pattern: &str) -> Result<()> {
        let root = Pattern::escape(&self.root.to_string_lossy());
        let full = format!("{}/{}", root, pattern.trim_start_matches('/'));

        for path in glob::glob_with(&full, GLOB_OPTIONS)? {
            let path = path?;
            if path.is_file() {
                let this_dest = resolve_dest(dest, &path)?;
                self.add_file(&path, this_dest)?;
            }
        }

        Ok(())
    }

    fn add_file(&mut self, src: &Path, dest: String) -> Result<()> {
        let shown = src.strip_prefix(&self.root).unwrap_or(src);
        println!("{}", trace_line(shown, &dest));

        if self.added.contains(&dest) {
            cliclack::log::warning(skip_message(shown, &dest))?;
            return Ok(());
        }

        let mut file = File::open(src)?;
        let options = file_options(&file)?;
        self.zip.start_file(dest.as_str(), options)?;
        io::copy(&mut file, &mut self.zip)?;

        self.added.insert(dest);
        self.written += 1;
        Ok(())
    }
}

/// A destination ending in `/` names a directory: the source's file name is
/// appended. The leading `/` is dropped since zip entry names are relative.
pub fn resolve_dest(dest: &str, src: &Path) -> Result<String> {
    let full = if dest.ends_with('/') {
        let name = src
            .file_name()
            .ok_or_else(|| Error::custom(format!("{} has no file name", src.display())))?;
        format!("{}{}", dest, name.to_string_lossy())
    } else {
        dest.to_string()
    };

    let name = full.trim_start_matches('/');
    if name.is_empty() {
        return Err(Error::custom(format!("empty destination for {}", src.display())));
    }
    Ok(name.to_string())
}

/// `source -> destination`, printed for every attempted write
pub fn trace_line(src: &Path, dest: &str) -> String {
    format!("{} -> {}", src.display(), dest)
}

/// Warning for a write dropped because `dest` is already in the archive
pub fn skip_message(src: &Path, dest: &str) -> String {
    format!("{dest} already packaged, skipping {}", src.display())
}

fn file_options(file: &File) -> Result<SimpleFileOptions> {
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(Some(9));

    #[cfg(unix)]
    let options = {
        use std::os::unix::fs::PermissionsExt;
        options.unix_permissions(file.metadata()?.permissions().mode())
    };
    #[cfg(not(unix))]
    let _ = file;

    Ok(options)
}
