use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub const EXIT_INTERRUPTED: i32 = 13;
pub const EXIT_INVALID_VALUE: i32 = 27;
pub const EXIT_FAILURE: i32 = 66;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error
{
    #[error("{0}")]
    InvalidArgument(String),
    #[error("interrupted by user")]
    Interrupted,
    #[error("terminal i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("failed to write session file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("could not read dictionary {}: {source}", path.display())]
    Dictionary { path: PathBuf, source: io::Error },
    #[error("invalid puzzle: {0}")]
    Puzzle(String),
}

impl Error
{
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32
    {
        match self {
            Error::Interrupted => EXIT_INTERRUPTED,
            Error::InvalidArgument(_) | Error::Puzzle(_) => EXIT_INVALID_VALUE,
            Error::Io(_) | Error::Json(_) | Error::Dictionary { .. } => EXIT_FAILURE,
        }
    }
}
