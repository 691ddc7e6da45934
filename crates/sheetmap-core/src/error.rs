//! Error types for sheetmap-core

use thiserror::Error;

/// Result alias pairing [`Error`] with any value type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in sheetmap-core
#[derive(Debug, Error)]
pub enum Error {
    /// Positional cell access outside `[1, cell count]`
    #[error("Cell position {0} out of bounds (cells: {1})")]
    CellOutOfBounds(u32, usize),

    /// Positional row access outside `[1, row count]`
    #[error("Row position {0} out of bounds (rows: {1})")]
    RowOutOfBounds(u32, usize),

    /// Positional sheet access outside `[1, sheet count]`
    #[error("Sheet position {0} out of bounds (count: {1})")]
    SheetOutOfBounds(u32, usize),

    /// Field metadata registered with a column index of zero
    #[error("Field '{0}' has column index 0 (columns are 1-based)")]
    InvalidColumn(String),

    /// Two field metas registered for the same column
    #[error("Column {0} already mapped by field '{1}'")]
    DuplicateColumn(u32, String),

    /// Two field metas registered with the same name
    #[error("Field name already registered: {0}")]
    DuplicateField(String),

    /// Free-form error carrying only a message
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Wrap a message as [`Error::Other`]
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }
}
