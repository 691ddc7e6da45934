//! Ordering properties of the sparse document model

use proptest::prelude::*;
use sheetmap_core::{Cell, Row, Sheet};

proptest! {
    /// Cells read back sorted by column no matter the insertion order.
    #[test]
    fn cells_read_sorted(columns in prop::collection::vec(1u32..500, 0..40)) {
        let mut row = Row::new(1);
        for &column in &columns {
            row.add_cell(Cell::new(column, column.to_string()));
        }
        let read: Vec<u32> = row.cells().map(Cell::column).collect();
        let mut expected = columns.clone();
        expected.sort_unstable();
        expected.dedup();
        prop_assert_eq!(read, expected);
    }

    /// Rows read back sorted by index no matter the insertion order.
    #[test]
    fn rows_read_sorted(indices in prop::collection::vec(1u32..500, 0..40)) {
        let mut sheet = Sheet::new(1);
        for &index in &indices {
            sheet.add_row(Row::new(index));
        }
        let read: Vec<u32> = sheet.rows().map(Row::index).collect();
        let mut expected = indices.clone();
        expected.sort_unstable();
        expected.dedup();
        prop_assert_eq!(read, expected);
    }

    /// Positional access agrees with sorted iteration across the whole row.
    #[test]
    fn positional_access_matches_iteration(columns in prop::collection::vec(1u32..500, 1..40)) {
        let mut row = Row::new(1);
        for &column in &columns {
            row.add_cell(Cell::empty(column));
        }
        for (i, cell) in row.cells().enumerate() {
            let positional = row.cell(i as u32 + 1).unwrap();
            prop_assert_eq!(positional.column(), cell.column());
        }
        prop_assert!(row.cell(row.cell_count() as u32 + 1).is_err());
    }
}
