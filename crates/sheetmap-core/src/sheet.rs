//! A sheet of rows, keyed and ordered by row index

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::row::Row;

/// A single sheet in a [`Workbook`](crate::Workbook).
///
/// Rows are keyed by their 1-based row index and stored sparsely; iteration
/// always yields them in row order regardless of insertion order. Adding a
/// row at an occupied index replaces the previous row.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sheet {
    index: u32,
    name: Option<String>,
    rows: BTreeMap<u32, Row>,
}

impl Sheet {
    /// Create an empty, unnamed sheet at the given 1-based sheet index.
    pub fn new(index: u32) -> Self {
        Sheet {
            index,
            name: None,
            rows: BTreeMap::new(),
        }
    }

    /// Create an empty, named sheet at the given 1-based sheet index.
    pub fn with_name<S: Into<String>>(index: u32, name: S) -> Self {
        Sheet {
            index,
            name: Some(name.into()),
            rows: BTreeMap::new(),
        }
    }

    /// The 1-based sheet index within the owning workbook.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// The sheet name, if one was set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Insert a row, keyed by its row index.
    ///
    /// Returns the row previously stored at that index, if any.
    pub fn add_row(&mut self, row: Row) -> Option<Row> {
        self.rows.insert(row.index(), row)
    }

    /// The row at the given 1-based position in row order.
    ///
    /// Position counts populated rows only; it is unrelated to the row index
    /// unless the sheet is dense. Fails outside `[1, row_count]`.
    pub fn row(&self, position: u32) -> Result<&Row> {
        let count = self.rows.len();
        if position == 0 || position as usize > count {
            return Err(Error::RowOutOfBounds(position, count));
        }
        self.rows
            .values()
            .nth(position as usize - 1)
            .ok_or(Error::RowOutOfBounds(position, count))
    }

    /// The row stored at the given row index, if any.
    pub fn row_at(&self, index: u32) -> Option<&Row> {
        self.rows.get(&index)
    }

    /// Iterate rows in ascending row-index order.
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.values()
    }

    /// The row with the lowest index, or `None` on an empty sheet.
    pub fn first_row(&self) -> Option<&Row> {
        self.rows.values().next()
    }

    /// The row with the highest index, or `None` on an empty sheet.
    pub fn last_row(&self) -> Option<&Row> {
        self.rows.values().next_back()
    }

    /// Number of populated rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Whether the sheet holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Highest populated column index across all rows, or `None` when every
    /// row is empty.
    pub fn last_column(&self) -> Option<u32> {
        self.rows
            .values()
            .filter_map(|row| row.last_cell())
            .map(|cell| cell.column())
            .max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;

    fn sample_sheet() -> Sheet {
        let mut sheet = Sheet::with_name(1, "data");
        sheet.add_row(Row::new(4));
        sheet.add_row(Row::new(1));
        sheet.add_row(Row::new(2));
        sheet
    }

    #[test]
    fn rows_iterate_in_index_order() {
        let sheet = sample_sheet();
        let indices: Vec<u32> = sheet.rows().map(Row::index).collect();
        assert_eq!(indices, [1, 2, 4]);
    }

    #[test]
    fn positional_access_is_one_based_over_sorted_rows() {
        let sheet = sample_sheet();
        assert_eq!(sheet.row(3).unwrap().index(), 4);
        assert!(sheet.row(0).is_err());
        assert!(sheet.row(4).is_err());
    }

    #[test]
    fn keyed_access_uses_row_index() {
        let sheet = sample_sheet();
        assert_eq!(sheet.row_at(4).map(Row::index), Some(4));
        assert_eq!(sheet.row_at(3), None);
    }

    #[test]
    fn add_row_replaces_at_occupied_index() {
        let mut sheet = sample_sheet();
        let mut replacement = Row::new(2);
        replacement.add_cell(Cell::new(1, "x"));
        let displaced = sheet.add_row(replacement);
        assert_eq!(displaced, Some(Row::new(2)));
        assert_eq!(sheet.row_count(), 3);
        assert_eq!(sheet.row_at(2).map(Row::cell_count), Some(1));
    }

    #[test]
    fn first_last_and_bounds() {
        let sheet = sample_sheet();
        assert_eq!(sheet.first_row().map(Row::index), Some(1));
        assert_eq!(sheet.last_row().map(Row::index), Some(4));

        let empty = Sheet::new(2);
        assert_eq!(empty.first_row(), None);
        assert_eq!(empty.last_row(), None);
        assert_eq!(empty.last_column(), None);
    }

    #[test]
    fn last_column_spans_all_rows() {
        let mut sheet = Sheet::new(1);
        let mut short = Row::new(1);
        short.add_cell(Cell::new(2, "a"));
        let mut long = Row::new(2);
        long.add_cell(Cell::new(7, "b"));
        sheet.add_row(short);
        sheet.add_row(long);
        assert_eq!(sheet.last_column(), Some(7));
    }
}
