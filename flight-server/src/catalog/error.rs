//! Catalog ingestion error types.

/// Errors that abort building a flight catalog.
///
/// A catalog is never built partially: one bad row rejects the whole load,
/// so systemic data problems surface instead of quietly dropping flights.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// A row parsed but describes an impossible flight
    #[error("malformed flight record at row {row}: {reason}")]
    MalformedRecord { row: usize, reason: String },

    /// The CSV itself could not be read
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The flights file could not be opened
    #[error("failed to open {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = CatalogError::MalformedRecord {
            row: 3,
            reason: "arrival must be after departure".into(),
        };
        assert_eq!(
            err.to_string(),
            "malformed flight record at row 3: arrival must be after departure"
        );

        let err = CatalogError::Io {
            path: "flights.csv".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(err.to_string(), "failed to open flights.csv: missing");
    }
}
