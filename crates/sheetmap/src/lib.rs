//! # sheetmap
//!
//! Metadata-driven mapping between spreadsheet documents and typed
//! records.
//!
//! Declare a column layout once as a [`SheetMeta`], then move data in
//! both directions through it: [`SheetComposer`] renders record lists
//! into the textual document model, and [`SheetParser`] reads documents
//! back into records, collecting one [`CoercionError`] per unreadable
//! cell instead of failing the batch. The CSV and XLSX bindings move the
//! document model in and out of files.
//!
//! ## Example
//!
//! ```rust
//! use sheetmap::prelude::*;
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Item {
//!     name: Option<String>,
//!     count: Option<i32>,
//! }
//!
//! impl FieldSource for Item {
//!     fn field_text(&self, field: &str) -> Option<String> {
//!         match field {
//!             "name" => self.name.clone(),
//!             "count" => self.count.map(|c| c.to_string()),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! impl FieldTarget for Item {
//!     fn set_field(&mut self, field: &str, value: FieldValue) {
//!         match field {
//!             "name" => self.name = value.into_text(),
//!             "count" => self.count = value.as_int(),
//!             _ => {}
//!         }
//!     }
//! }
//!
//! # fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//! let meta = SheetMeta::new(2)
//!     .with_field(FieldMeta::new("name", 1).with_header(1, "Name"))?
//!     .with_field(
//!         FieldMeta::new("count", 2)
//!             .with_header(1, "Count")
//!             .with_type(FieldType::Int),
//!     )?;
//!
//! let items = vec![Item {
//!     name: Some("bolt".into()),
//!     count: Some(40),
//! }];
//! let sheet = SheetComposer::new().compose(&meta, &SheetData::from_records(1, items))?;
//! assert_eq!(sheet.row(2)?.cell(2)?.text(), "40");
//!
//! let output = SheetParser::<Item>::new().parse(&sheet, &meta)?;
//! assert!(output.is_clean());
//! assert_eq!(output.records[0].count, Some(40));
//! # Ok(())
//! # }
//! ```

pub mod prelude;

// Document model and metadata
pub use sheetmap_core::{
    Cell, Error, FieldMeta, FieldType, HeaderMeta, Result, Row, Sheet, SheetMeta, Workbook,
};

// Compose side
pub use sheetmap_compose::{
    extractors, ComposeError, ComposeResult, ExtractFn, FieldSource, SheetComposer, SheetData,
};

// Parse side
pub use sheetmap_parse::{
    binders, BindFn, CoercionError, FieldTarget, FieldValue, ParseError, ParseOutput, ParseResult,
    SheetParser,
};

// File bindings
pub use sheetmap_csv::{
    CsvError, CsvReadOptions, CsvReader, CsvResult, CsvWriteOptions, CsvWriter, LineTerminator,
};
pub use sheetmap_xlsx::{XlsxError, XlsxReader, XlsxResult, XlsxWriter};

use std::path::Path;

/// Extension trait adding file I/O to [`Workbook`].
///
/// The file format is chosen from the path extension. XLSX and XLSM
/// files read and write a whole workbook; a CSV file holds a single
/// sheet, so opening one yields a one-sheet workbook and saving writes
/// the first sheet.
pub trait WorkbookExt {
    /// Open a workbook from a file, dispatching on the extension
    fn open<P: AsRef<Path>>(path: P) -> Result<Workbook>;

    /// Save the workbook to a file, dispatching on the extension
    fn save<P: AsRef<Path>>(&self, path: P) -> Result<()>;
}

impl WorkbookExt for Workbook {
    fn open<P: AsRef<Path>>(path: P) -> Result<Workbook> {
        let path = path.as_ref();
        match extension_of(path).as_deref() {
            Some("xlsx") | Some("xlsm") => {
                XlsxReader::read_file(path).map_err(|e| Error::other(e.to_string()))
            }
            Some("csv") => {
                let sheet = CsvReader::read_file(path, &CsvReadOptions::default())
                    .map_err(|e| Error::other(e.to_string()))?;
                let mut workbook = Workbook::new();
                workbook.add_sheet(sheet);
                Ok(workbook)
            }
            _ => Err(Error::other(format!(
                "Unsupported file format: {}",
                path.display()
            ))),
        }
    }

    fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        match extension_of(path).as_deref() {
            Some("xlsx") => {
                XlsxWriter::write_file(self, path).map_err(|e| Error::other(e.to_string()))
            }
            Some("csv") => match self.sheets().first() {
                Some(sheet) => CsvWriter::write_file(sheet, path, &CsvWriteOptions::default())
                    .map_err(|e| Error::other(e.to_string())),
                None => Err(Error::other("No sheets to save")),
            },
            _ => Err(Error::other(format!(
                "Unsupported file format: {}",
                path.display()
            ))),
        }
    }
}

fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
}
