//! Error kinds surfaced by the report pipeline.

use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    /// The dataset file exists but is not the expected table shape.
    #[error("malformed dataset {}: {message}", .path.display())]
    DataFormat { path: PathBuf, message: String },

    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The chart could not be drawn or encoded.
    #[error("chart rendering failed: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, ReportError>;

impl ReportError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        ReportError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn data_format(path: &Path, message: impl Into<String>) -> Self {
        ReportError::DataFormat {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }

    pub(crate) fn render(err: impl std::fmt::Display) -> Self {
        ReportError::Render(err.to_string())
    }
}
