use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Custom(String),

    #[error("unable to access start path {path}: {source}")]
    StartPath {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("marker file `{marker}` not found in {start} or any parent directory")]
    MarkerNotFound { marker: String, start: PathBuf },

    #[error("unable to read version file {path}: {source}")]
    VersionFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no VERSION constant found in {0}")]
    VersionNotFound(PathBuf),

    #[error("missing build output directory: {0}")]
    MissingBuildOutput(PathBuf),

    #[error("invalid manifest: {0}")]
    InvalidManifest(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Zip(#[from] zip::result::ZipError),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    #[error("invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error(transparent)]
    Glob(#[from] glob::GlobError),

    #[error(transparent)]
    WalkDir(#[from] walkdir::Error),

    #[error("unable to format date: {0}")]
    Time(#[from] time::error::Format),
}

impl Error {
    pub fn custom<T: Into<String>>(msg: T) -> Self {
        Error::Custom(msg.into())
    }
}
