//! Generic attribute access for the compose path

/// Read access to a record's fields by name, as cell text.
///
/// The composer falls back to this when no custom extractor is registered
/// for a field. Implementations return `None` both for unset values and
/// for unknown field names; either way the composed cell is empty.
pub trait FieldSource {
    /// The cell text for the named field, or `None` when unset or unknown.
    fn field_text(&self, field: &str) -> Option<String>;
}
