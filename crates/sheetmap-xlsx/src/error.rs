//! Error types for the XLSX binding

use thiserror::Error;

/// Result alias used throughout the XLSX binding
pub type XlsxResult<T> = std::result::Result<T, XlsxError>;

/// Failures raised while reading or writing XLSX workbooks
#[derive(Debug, Error)]
pub enum XlsxError {
    /// The underlying file or stream failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The workbook could not be decoded
    #[error("XLSX read error: {0}")]
    Read(#[from] calamine::XlsxError),

    /// The workbook could not be encoded
    #[error("XLSX write error: {0}")]
    Write(#[from] rust_xlsxwriter::XlsxError),

    /// Cell address that does not fit the xlsx grid
    #[error("Cell at row {0}, column {1} does not fit the xlsx grid")]
    OutOfGrid(u32, u32),
}
