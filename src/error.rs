//! Error kinds surfaced by the generator.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenError {
    #[error("invalid geometry file {}: {reason}", .path.display())]
    InvalidGeometryFile { path: PathBuf, reason: String },

    #[error("input file {} is not named <molecule>_dimer.xyz with a plain molecule name", .0.display())]
    InvalidInputName(PathBuf),

    #[error("missing argument: {0}")]
    MissingArgument(String),

    #[error("conflicting arguments: {0}")]
    ConflictingArguments(String),

    #[error("unable to read {}: {source}", .path.display())]
    UnreadableInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to write {}: {source}", .path.display())]
    UnwritableOutputPath {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl GenError {
    pub fn geometry(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::InvalidGeometryFile {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn unwritable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::UnwritableOutputPath {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, GenError>;
