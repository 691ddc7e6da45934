//! # sheetmap-parse
//!
//! The sheet-to-objects half of the sheetmap engine.
//!
//! [`SheetParser`] reads a [`Sheet`](sheetmap_core::Sheet) back into typed
//! records according to a [`SheetMeta`](sheetmap_core::SheetMeta). Cell
//! text is coerced to each field's declared
//! [`FieldType`](sheetmap_core::FieldType) and delivered through the
//! record's [`FieldTarget`] implementation; a cell that will not coerce
//! becomes a [`CoercionError`] in the output instead of aborting the pass,
//! so one call reports every bad cell of an upload.
//!
//! Per-field overrides mirror the compose side: register a binder from the
//! [`binders`] module (or your own) for vocabularies and formats the
//! default coercion does not cover.

pub mod binders;
mod coerce;
pub mod error;
pub mod parser;
pub mod target;
pub mod value;

// Re-exports for convenience
pub use binders::BindFn;
pub use error::{CoercionError, ParseError, ParseResult};
pub use parser::{ParseOutput, SheetParser};
pub use target::FieldTarget;
pub use value::FieldValue;
