//! CSV reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use sheetmap_core::{Cell, Row, Sheet};

use crate::error::CsvResult;
use crate::options::CsvReadOptions;

/// CSV file reader
pub struct CsvReader;

impl CsvReader {
    /// Read a CSV file into a sheet
    pub fn read_file<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> CsvResult<Sheet> {
        let file = File::open(path)?;
        Self::read(file, options)
    }

    /// Read CSV from a reader into a sheet
    ///
    /// Every record becomes a row (1-based, in file order) and every field
    /// a string-valued cell; blank fields become empty cells. No row is
    /// treated as a header here: header layout belongs to the sheet
    /// metadata, so the parse engine can skip header rows itself.
    pub fn read<R: Read>(reader: R, options: &CsvReadOptions) -> CsvResult<Sheet> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut sheet = match &options.sheet_name {
            Some(name) => Sheet::with_name(options.sheet_index, name),
            None => Sheet::new(options.sheet_index),
        };

        for (i, result) in csv_reader.records().enumerate() {
            let record = result?;
            let mut row = Row::new(i as u32 + 1);
            for (j, field) in record.iter().enumerate() {
                let column = j as u32 + 1;
                let cell = if field.is_empty() {
                    Cell::empty(column)
                } else {
                    Cell::new(column, field)
                };
                row.add_cell(cell);
            }
            sheet.add_row(row);
        }

        Ok(sheet)
    }
}
