//! Airport data error types.

/// Errors that can occur when loading airport reference data.
#[derive(Debug, thiserror::Error)]
pub enum AirportDataError {
    /// The CSV itself could not be read
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A file could not be opened
    #[error("failed to open {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl AirportDataError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        AirportDataError::Io {
            path: path.display().to_string(),
            source,
        }
    }
}
