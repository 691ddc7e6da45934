//! # sheetmap-core
//!
//! Document and metadata model for the sheetmap mapping engine.
//!
//! Two families of types live here:
//! - The textual document model: [`Workbook`] holding [`Sheet`]s holding
//!   [`Row`]s holding [`Cell`]s, all 1-based and always read in index
//!   order regardless of insertion order.
//! - The metadata model driving the engines: [`SheetMeta`], [`FieldMeta`],
//!   [`HeaderMeta`], and the [`FieldType`] coercion targets.
//!
//! ## Example
//!
//! ```rust
//! use sheetmap_core::{Cell, Row};
//!
//! let mut row = Row::new(1);
//! row.add_cell(Cell::new(2, "b"));
//! row.add_cell(Cell::new(1, "a"));
//!
//! // Cells always read back in column order
//! let texts: Vec<_> = row.cells().map(|c| c.text()).collect();
//! assert_eq!(texts, ["a", "b"]);
//! ```

pub mod cell;
pub mod error;
pub mod meta;
pub mod row;
pub mod sheet;
pub mod workbook;

// Re-exports for convenience
pub use cell::Cell;
pub use error::{Error, Result};
pub use meta::{FieldMeta, FieldType, HeaderMeta, SheetMeta};
pub use row::Row;
pub use sheet::Sheet;
pub use workbook::Workbook;
