//! Error types for the CSV binding

use thiserror::Error;

/// Result alias used throughout the CSV binding
pub type CsvResult<T> = std::result::Result<T, CsvError>;

/// Failures raised while reading or writing CSV
#[derive(Debug, Error)]
pub enum CsvError {
    /// The underlying file or stream failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV encoder or decoder rejected the data
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
