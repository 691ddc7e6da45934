//! Metadata describing how sheet columns map onto object fields
//!
//! This module contains:
//! - [`FieldMeta`] - One logical field: name, column, headers, type
//! - [`HeaderMeta`] - One header cell attached to a field
//! - [`SheetMeta`] - Sheet-level layout plus the registered fields
//! - [`FieldType`] - The coercion target types

mod field;
mod sheet_meta;

pub use field::{FieldMeta, FieldType, HeaderMeta};
pub use sheet_meta::SheetMeta;
