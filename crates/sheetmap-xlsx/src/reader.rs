//! XLSX reader backed by calamine

use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use calamine::{Data, Range, Reader, Xlsx};
use sheetmap_core::{Cell, Row, Sheet, Workbook};

use crate::error::XlsxResult;

/// XLSX file reader
pub struct XlsxReader;

impl XlsxReader {
    /// Read an XLSX file into a workbook
    pub fn read_file<P: AsRef<Path>>(path: P) -> XlsxResult<Workbook> {
        let file = File::open(path)?;
        Self::read(BufReader::new(file))
    }

    /// Read XLSX from a reader into a workbook
    ///
    /// Sheets keep their file order and the n-th sheet gets index n
    /// (1-based). Cell positions are absolute, so a sheet whose content
    /// starts at B3 produces rows from index 3 with cells from column 2.
    /// Every cell is rendered textually: numbers with an integral value
    /// print without a fraction part, booleans as `true`/`false`. Formula
    /// error cells are skipped with a warning, and rows with no populated
    /// cells are omitted.
    pub fn read<RS: Read + Seek>(reader: RS) -> XlsxResult<Workbook> {
        let mut xlsx: Xlsx<RS> = Xlsx::new(reader)?;
        let mut workbook = Workbook::new();

        let names = xlsx.sheet_names().to_vec();
        for (i, name) in names.iter().enumerate() {
            let range = xlsx.worksheet_range(name)?;
            let mut sheet = Sheet::with_name(i as u32 + 1, name);
            read_range(&range, &mut sheet);
            workbook.add_sheet(sheet);
        }

        Ok(workbook)
    }
}

fn read_range(range: &Range<Data>, sheet: &mut Sheet) {
    let (start_row, start_column) = match range.start() {
        Some(start) => start,
        None => return,
    };

    for (i, cells) in range.rows().enumerate() {
        let row_index = start_row + i as u32 + 1;
        let mut row = Row::new(row_index);
        for (j, data) in cells.iter().enumerate() {
            let column = start_column + j as u32 + 1;
            if let Some(text) = data_to_text(data, row_index, column) {
                row.add_cell(Cell::new(column, text));
            }
        }
        if !row.is_empty() {
            sheet.add_row(row);
        }
    }
}

fn data_to_text(data: &Data, row: u32, column: u32) -> Option<String> {
    match data {
        Data::Empty => None,
        Data::String(s) => Some(s.clone()),
        Data::Float(f) => Some(number_to_text(*f)),
        Data::Int(i) => Some(i.to_string()),
        Data::Bool(b) => Some(b.to_string()),
        // serial number; calendar rendering is a mapping concern
        Data::DateTime(dt) => Some(number_to_text(dt.as_f64())),
        Data::DateTimeIso(s) => Some(s.clone()),
        Data::DurationIso(s) => Some(s.clone()),
        Data::Error(e) => {
            log::warn!(
                "Skipping error cell at row {}, column {}: {:?}",
                row,
                column,
                e
            );
            None
        }
    }
}

/// Render a number the way it was typed: integral values print without a
/// fraction part, so a spreadsheet `10000` comes back as the token
/// `"10000"` rather than `"10000.0"`.
fn number_to_text(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}
