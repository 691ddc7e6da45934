//! Write access to a record's fields by name

use crate::value::FieldValue;

/// Write access to a record's fields by name.
///
/// The parser calls this once per mapped field per data row, with the
/// value already coerced to the field's declared type. Implementations
/// ignore unknown field names by convention, which keeps one `SheetMeta`
/// usable across record types sharing a subset of fields.
pub trait FieldTarget {
    /// Store a coerced value into the named field.
    fn set_field(&mut self, field: &str, value: FieldValue);
}
