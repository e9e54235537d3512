//! Error types.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Error is returned by input access and manifest decoding.
///
/// Only [`Error::MissingFile`] and [`Error::Read`] abort a comparison.
/// Decode failures drop the offending document and are only logged.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot find file: {}", path.display())]
    MissingFile { path: PathBuf },

    #[error("cannot read file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write report: {0}")]
    Output(#[source] io::Error),

    #[error("document {index}: invalid YAML: {source}")]
    Decode {
        index: usize,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("document {index}: {message}")]
    Shape { index: usize, message: String },
}

impl Error {
    /// Creates a shape error for the document at `index`.
    pub fn shape(index: usize, message: impl Into<String>) -> Self {
        Error::Shape {
            index,
            message: message.into(),
        }
    }

    /// Returns true if this error only affects a single document.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::Decode { .. } | Error::Shape { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
