use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("The path '{}' does not exist.", .0.display())]
    TargetNotFound(PathBuf),

    #[error("'{}' is not a directory.", .0.display())]
    NotADirectory(PathBuf),

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Action log error: {0}")]
    ActionLog(#[from] csv::Error),
}

impl Error {
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// True for failures detected before anything on disk was touched.
    pub fn is_invalid_target(&self) -> bool {
        matches!(self, Error::TargetNotFound(_) | Error::NotADirectory(_))
    }
}
