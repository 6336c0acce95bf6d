//! Scan errors

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while acquiring the instruction source
#[derive(Debug, Error)]
pub enum ScanError {
    /// The source could not be opened or read
    #[error("cannot read instructions from {}: {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScanError {
    pub fn source_unavailable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::SourceUnavailable { path: path.into(), source }
    }

    /// Path of the source involved
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::SourceUnavailable { path, .. } => path,
        }
    }
}
