use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or exporting the happiness dataset.
///
/// Loading errors are fatal at startup; export errors are reported to the
/// user and the dashboard keeps running.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("cannot access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("required column '{0}' is missing")]
    MissingColumn(String),

    #[error("country '{country}' has a non-finite '{column}'")]
    NonFinite { country: String, column: &'static str },

    #[error("country '{0}' appears more than once")]
    DuplicateCountry(String),

    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),
}

impl DataError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DataError::Io {
            path: path.into(),
            source,
        }
    }
}
