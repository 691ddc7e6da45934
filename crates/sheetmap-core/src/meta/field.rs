//! Per-field metadata: target column, headers, declared type

use std::collections::BTreeMap;
use std::fmt;

/// Declared semantic type of a field, driving parse-side coercion.
///
/// The compose path renders every field textually; the declared type only
/// matters when cell text is coerced back into objects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldType {
    /// 32-bit signed integer, exact base-10 parse
    Int,
    /// 64-bit signed integer, exact base-10 parse
    Long,
    /// 32-bit binary float, locale-invariant parse
    Float,
    /// 64-bit binary float, locale-invariant parse
    Double,
    /// Strict `true`/`false` vocabulary (ASCII case-insensitive)
    Bool,
    /// Arbitrary-precision decimal, scientific notation accepted
    Decimal,
    /// Raw text, no coercion
    #[default]
    Text,
}

impl FieldType {
    /// Name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            FieldType::Int => "int",
            FieldType::Long => "long",
            FieldType::Float => "float",
            FieldType::Double => "double",
            FieldType::Bool => "bool",
            FieldType::Decimal => "decimal",
            FieldType::Text => "text",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One header cell for a field: the header row it occupies and its text.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeaderMeta {
    row: u32,
    text: String,
}

impl HeaderMeta {
    /// Create a header cell for the given 1-based header row.
    pub fn new<S: Into<String>>(row: u32, text: S) -> Self {
        HeaderMeta {
            row,
            text: text.into(),
        }
    }

    /// The 1-based header row this text occupies.
    pub fn row(&self) -> u32 {
        self.row
    }

    /// The header text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Metadata for one logical field: its name, target column, header cells,
/// declared type, and whether a value is required on the parse path.
///
/// Built in builder style:
///
/// ```rust
/// use sheetmap_core::{FieldMeta, FieldType};
///
/// let field = FieldMeta::new("amount", 3)
///     .with_type(FieldType::Decimal)
///     .with_header(1, "Amount")
///     .required();
///
/// assert_eq!(field.column(), 3);
/// assert!(field.is_required());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldMeta {
    name: String,
    column: u32,
    field_type: FieldType,
    required: bool,
    headers: BTreeMap<u32, HeaderMeta>,
}

impl FieldMeta {
    /// Create a field mapped to the given 1-based column, typed
    /// [`FieldType::Text`] and optional.
    pub fn new<S: Into<String>>(name: S, column: u32) -> Self {
        FieldMeta {
            name: name.into(),
            column,
            field_type: FieldType::default(),
            required: false,
            headers: BTreeMap::new(),
        }
    }

    /// Attach a header cell at the given header row, replacing any previous
    /// header for that row.
    pub fn with_header<S: Into<String>>(mut self, row: u32, text: S) -> Self {
        self.headers.insert(row, HeaderMeta::new(row, text));
        self
    }

    /// Declare the coercion target type.
    pub fn with_type(mut self, field_type: FieldType) -> Self {
        self.field_type = field_type;
        self
    }

    /// Mark the field as required: an empty cell becomes a coercion error
    /// on the parse path.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// The field name, unique within its sheet metadata.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The 1-based column this field maps to.
    pub fn column(&self) -> u32 {
        self.column
    }

    /// The declared coercion target type.
    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    /// Whether an empty cell is a coercion error for this field.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// The header cell for the given header row, if any.
    pub fn header(&self, row: u32) -> Option<&HeaderMeta> {
        self.headers.get(&row)
    }

    /// Iterate header cells in ascending header-row order.
    pub fn headers(&self) -> impl Iterator<Item = &HeaderMeta> {
        self.headers.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_optional_text() {
        let field = FieldMeta::new("name", 1);
        assert_eq!(field.field_type(), FieldType::Text);
        assert!(!field.is_required());
        assert_eq!(field.headers().count(), 0);
    }

    #[test]
    fn headers_are_keyed_by_row() {
        let field = FieldMeta::new("name", 1)
            .with_header(2, "name (en)")
            .with_header(1, "Name");
        let rows: Vec<u32> = field.headers().map(HeaderMeta::row).collect();
        assert_eq!(rows, [1, 2]);
        assert_eq!(field.header(2).map(HeaderMeta::text), Some("name (en)"));
        assert_eq!(field.header(3), None);
    }

    #[test]
    fn with_header_replaces_same_row() {
        let field = FieldMeta::new("name", 1)
            .with_header(1, "old")
            .with_header(1, "new");
        assert_eq!(field.header(1).map(HeaderMeta::text), Some("new"));
        assert_eq!(field.headers().count(), 1);
    }

    #[test]
    fn field_type_names() {
        assert_eq!(FieldType::Int.name(), "int");
        assert_eq!(FieldType::Decimal.to_string(), "decimal");
    }
}
