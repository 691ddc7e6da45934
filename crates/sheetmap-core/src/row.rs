//! A row of cells, keyed and ordered by column index

use std::collections::BTreeMap;

use crate::cell::Cell;
use crate::error::{Error, Result};

/// A single row in a [`Sheet`](crate::Sheet).
///
/// Cells are keyed by their 1-based column index and stored sparsely;
/// iteration always yields them in column order regardless of insertion
/// order. Adding a cell at an occupied column replaces the previous cell.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Row {
    index: u32,
    cells: BTreeMap<u32, Cell>,
}

impl Row {
    /// Create an empty row at the given 1-based row index.
    pub fn new(index: u32) -> Self {
        Row {
            index,
            cells: BTreeMap::new(),
        }
    }

    /// The 1-based row index within the owning sheet.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Insert a cell, keyed by its column.
    ///
    /// Returns the cell previously stored at that column, if any.
    pub fn add_cell(&mut self, cell: Cell) -> Option<Cell> {
        self.cells.insert(cell.column(), cell)
    }

    /// The cell at the given 1-based position in column order.
    ///
    /// Position counts populated cells only; it is unrelated to the column
    /// index unless the row is dense. Fails outside `[1, cell_count]`.
    pub fn cell(&self, position: u32) -> Result<&Cell> {
        let count = self.cells.len();
        if position == 0 || position as usize > count {
            return Err(Error::CellOutOfBounds(position, count));
        }
        self.cells
            .values()
            .nth(position as usize - 1)
            .ok_or(Error::CellOutOfBounds(position, count))
    }

    /// The cell stored at the given column index, if any.
    pub fn cell_at(&self, column: u32) -> Option<&Cell> {
        self.cells.get(&column)
    }

    /// Iterate cells in ascending column order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.values()
    }

    /// The cell with the lowest column index, or `None` on an empty row.
    pub fn first_cell(&self) -> Option<&Cell> {
        self.cells.values().next()
    }

    /// The cell with the highest column index, or `None` on an empty row.
    pub fn last_cell(&self) -> Option<&Cell> {
        self.cells.values().next_back()
    }

    /// Number of populated cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Whether the row holds no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample_row() -> Row {
        let mut row = Row::new(1);
        row.add_cell(Cell::new(5, "e"));
        row.add_cell(Cell::new(2, "b"));
        row.add_cell(Cell::new(9, "i"));
        row
    }

    #[test]
    fn cells_iterate_in_column_order() {
        let row = sample_row();
        let columns: Vec<u32> = row.cells().map(Cell::column).collect();
        assert_eq!(columns, [2, 5, 9]);
    }

    #[test]
    fn positional_access_is_one_based_over_sorted_cells() {
        let row = sample_row();
        assert_eq!(row.cell(1).unwrap().text(), "b");
        assert_eq!(row.cell(3).unwrap().text(), "i");
        assert!(row.cell(0).is_err());
        assert!(row.cell(4).is_err());
    }

    #[test]
    fn keyed_access_uses_column_index() {
        let row = sample_row();
        assert_eq!(row.cell_at(5).map(Cell::text), Some("e"));
        assert_eq!(row.cell_at(3), None);
    }

    #[test]
    fn add_cell_replaces_at_occupied_column() {
        let mut row = sample_row();
        let displaced = row.add_cell(Cell::new(5, "E"));
        assert_eq!(displaced, Some(Cell::new(5, "e")));
        assert_eq!(row.cell_count(), 3);
        assert_eq!(row.cell_at(5).map(Cell::text), Some("E"));
    }

    #[test]
    fn first_and_last_cell() {
        let row = sample_row();
        assert_eq!(row.first_cell().map(Cell::column), Some(2));
        assert_eq!(row.last_cell().map(Cell::column), Some(9));
        assert_eq!(Row::new(1).first_cell(), None);
        assert_eq!(Row::new(1).last_cell(), None);
    }
}
