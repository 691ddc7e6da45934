//! Error types for sheetmap-compose

use thiserror::Error;

/// Result type alias using [`ComposeError`]
pub type ComposeResult<T> = std::result::Result<T, ComposeError>;

/// Errors that abort a compose call before any row is built
#[derive(Debug, Error)]
pub enum ComposeError {
    /// Sheet metadata with no registered fields
    #[error("Sheet meta for sheet {0} has no fields registered")]
    NoFields(u32),

    /// Data start row of zero (rows are 1-based)
    #[error("Data start row must be >= 1 (sheet {0})")]
    InvalidDataStartRow(u32),

    /// Records tagged for a different sheet than the metadata targets
    #[error("Data is for sheet {data}, meta targets sheet {meta}")]
    SheetIndexMismatch { data: u32, meta: u32 },
}
