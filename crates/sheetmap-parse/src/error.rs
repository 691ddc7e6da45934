//! Error types for sheetmap-parse

use sheetmap_core::FieldType;
use thiserror::Error;

/// Result type alias using [`ParseError`]
pub type ParseResult<T> = std::result::Result<T, ParseError>;

/// Structural errors that abort a parse call before any row is read
#[derive(Debug, Error)]
pub enum ParseError {
    /// The sheet's own index differs from the metadata's target
    #[error("Sheet {sheet} does not correspond to meta targeting sheet {meta}")]
    SheetIndexMismatch { sheet: u32, meta: u32 },

    /// Data start row of zero (rows are 1-based)
    #[error("Data start row must be >= 1 (sheet {0})")]
    InvalidDataStartRow(u32),
}

/// One cell that failed to coerce to its field's declared type.
///
/// Coercion failures never abort a parse; they are collected in
/// row-then-column order and returned alongside the records, so a caller
/// can report every bad cell of an upload in one pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("Row {row} column {column} field '{field}': cannot read {raw:?} as {target}: {cause}")]
pub struct CoercionError {
    /// 1-based row index of the offending cell
    pub row: u32,
    /// 1-based column index of the offending cell
    pub column: u32,
    /// Field name from the metadata
    pub field: String,
    /// The raw cell text that failed
    pub raw: String,
    /// The declared target type
    pub target: FieldType,
    /// Underlying cause message
    pub cause: String,
}
