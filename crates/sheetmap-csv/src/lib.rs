//! # sheetmap-csv
//!
//! CSV binding for the sheetmap document model.
//!
//! [`CsvReader`] turns CSV input into a [`Sheet`](sheetmap_core::Sheet);
//! [`CsvWriter`] renders one back out. Both directions are purely textual:
//! typing belongs to the mapping engines and header layout to the sheet
//! metadata, so this crate never interprets content.

pub mod error;
pub mod options;
pub mod reader;
pub mod writer;

pub use error::{CsvError, CsvResult};
pub use options::{CsvReadOptions, CsvWriteOptions, LineTerminator};
pub use reader::CsvReader;
pub use writer::CsvWriter;
