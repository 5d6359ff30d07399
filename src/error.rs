use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("tab width must be at least 1")]
    InvalidTabWidth,

    #[error("failed to save {}: {source}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to open log file {}: {source}", .path.display())]
    Log {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no file name to save to")]
    NoFilePath,

    #[error("terminal error: {0}")]
    Terminal(#[from] crossterm::ErrorKind),
}

pub type Result<T> = std::result::Result<T, Error>;
