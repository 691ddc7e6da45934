//! A single cell: a 1-based column index plus optional textual content

/// A single cell in a [`Row`](crate::Row).
///
/// Cells carry textual content only; typed interpretation happens in the
/// mapping engines, driven by field metadata. A cell with no value is an
/// "empty cell", used to pad column gaps so consumers see a dense grid.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    column: u32,
    value: Option<String>,
}

impl Cell {
    /// Create a cell holding `value` at the given 1-based column.
    pub fn new<S: Into<String>>(column: u32, value: S) -> Self {
        Cell {
            column,
            value: Some(value.into()),
        }
    }

    /// Create an empty cell at the given 1-based column.
    pub fn empty(column: u32) -> Self {
        Cell {
            column,
            value: None,
        }
    }

    /// The 1-based column index.
    pub fn column(&self) -> u32 {
        self.column
    }

    /// The textual content, or `None` for an empty cell.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// The textual content, with an empty cell read as `""`.
    ///
    /// This is the view the parse engine takes: an absent cell and an empty
    /// cell both coerce from the empty string.
    pub fn text(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }

    /// Whether the cell holds no value.
    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    /// Consume the cell, returning its content.
    pub fn into_value(self) -> Option<String> {
        self.value
    }
}
