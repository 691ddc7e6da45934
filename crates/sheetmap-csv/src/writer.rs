//! CSV writer

use std::fs::File;
use std::io::Write;
use std::path::Path;

use sheetmap_core::Sheet;

use crate::error::CsvResult;
use crate::options::CsvWriteOptions;

/// CSV file writer
pub struct CsvWriter;

impl CsvWriter {
    /// Write a sheet to a CSV file
    pub fn write_file<P: AsRef<Path>>(
        sheet: &Sheet,
        path: P,
        options: &CsvWriteOptions,
    ) -> CsvResult<()> {
        let file = File::create(path)?;
        Self::write(sheet, file, options)
    }

    /// Write a sheet to a writer
    ///
    /// One record per row index from 1 to the last populated row. Every
    /// record spans columns `1..=last_column` of the whole sheet, with
    /// absent and empty cells written as blank fields and a wholly absent
    /// row written as a blank record, so the output stays rectangular and
    /// row alignment survives the file.
    pub fn write<W: Write>(sheet: &Sheet, writer: W, options: &CsvWriteOptions) -> CsvResult<()> {
        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .terminator(options.line_terminator.into())
            .from_writer(writer);

        let (last_row, last_column) = match (sheet.last_row(), sheet.last_column()) {
            (Some(row), Some(column)) => (row.index(), column),
            _ => {
                csv_writer.flush()?;
                return Ok(());
            }
        };

        for index in 1..=last_row {
            let row = sheet.row_at(index);
            let mut record = Vec::with_capacity(last_column as usize);
            for column in 1..=last_column {
                let text = row
                    .and_then(|r| r.cell_at(column))
                    .and_then(|c| c.value())
                    .unwrap_or("");
                record.push(text);
            }
            csv_writer.write_record(&record)?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}
