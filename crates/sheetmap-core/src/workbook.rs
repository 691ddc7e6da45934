//! The top-level workbook container

use crate::error::{Error, Result};
use crate::sheet::Sheet;

/// An ordered collection of [`Sheet`]s.
///
/// Sheets keep their insertion order; the sheet index carried by each
/// [`Sheet`] identifies it to the mapping engines and need not coincide
/// with its position here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Workbook {
    sheets: Vec<Sheet>,
}

impl Workbook {
    /// Create an empty workbook.
    pub fn new() -> Self {
        Workbook::default()
    }

    /// Append a sheet, preserving insertion order.
    pub fn add_sheet(&mut self, sheet: Sheet) {
        self.sheets.push(sheet);
    }

    /// The sheet at the given 1-based position in insertion order.
    ///
    /// Fails outside `[1, sheet_count]`.
    pub fn sheet(&self, position: u32) -> Result<&Sheet> {
        let count = self.sheets.len();
        if position == 0 || position as usize > count {
            return Err(Error::SheetOutOfBounds(position, count));
        }
        self.sheets
            .get(position as usize - 1)
            .ok_or(Error::SheetOutOfBounds(position, count))
    }

    /// The first sheet whose own index matches, if any.
    pub fn sheet_by_index(&self, index: u32) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.index() == index)
    }

    /// The first sheet with the given name, if any.
    pub fn sheet_by_name(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name() == Some(name))
    }

    /// All sheets in insertion order.
    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    /// Number of sheets.
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    /// Whether the workbook holds no sheets.
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}
