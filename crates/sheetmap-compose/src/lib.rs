//! # sheetmap-compose
//!
//! The object-to-sheet half of the sheetmap engine.
//!
//! [`SheetComposer`] renders a [`SheetData`] record list into a
//! [`Sheet`](sheetmap_core::Sheet) according to a
//! [`SheetMeta`](sheetmap_core::SheetMeta): header rows first, then one
//! data row per record, every mapped column rendered and every gap padded
//! with an empty cell.
//!
//! Values come from the [`FieldSource`] implementation of the record type,
//! unless a custom extractor is registered for the field name; the
//! [`extractors`] module ships helpers for common overrides (token-pair
//! booleans, formatted dates).

pub mod composer;
pub mod data;
pub mod error;
pub mod extractors;
pub mod source;

// Re-exports for convenience
pub use composer::SheetComposer;
pub use data::SheetData;
pub use error::{ComposeError, ComposeResult};
pub use extractors::ExtractFn;
pub use source::FieldSource;
