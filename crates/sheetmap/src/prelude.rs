//! Prelude module - common imports for working with sheetmap
//!
//! ```rust
//! use sheetmap::prelude::*;
//! ```

pub use crate::{
    // Field extractor and binder helpers
    binders,
    extractors,
    // Document model
    Cell,
    Row,
    Sheet,
    Workbook,
    // Metadata
    FieldMeta,
    FieldType,
    HeaderMeta,
    SheetMeta,
    // Compose side
    ComposeError,
    ComposeResult,
    ExtractFn,
    FieldSource,
    SheetComposer,
    SheetData,
    // Parse side
    BindFn,
    CoercionError,
    FieldTarget,
    FieldValue,
    ParseError,
    ParseOutput,
    ParseResult,
    SheetParser,
    // File bindings
    CsvError,
    CsvReadOptions,
    CsvReader,
    CsvResult,
    CsvWriteOptions,
    CsvWriter,
    LineTerminator,
    WorkbookExt,
    XlsxError,
    XlsxReader,
    XlsxResult,
    XlsxWriter,
    // Core error types
    Error,
    Result,
};
