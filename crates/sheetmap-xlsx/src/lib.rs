//! # sheetmap-xlsx
//!
//! XLSX binding for the sheetmap document model, reading through
//! `calamine` and writing through `rust_xlsxwriter`.
//!
//! [`XlsxReader`] renders every spreadsheet cell textually (the reading
//! the mapping engines coerce from); [`XlsxWriter`] writes every valued
//! cell as a string. Positions are absolute and 1-based on the model
//! side, 0-based on the file side.

pub mod error;
pub mod reader;
pub mod writer;

pub use error::{XlsxError, XlsxResult};
pub use reader::XlsxReader;
pub use writer::XlsxWriter;
