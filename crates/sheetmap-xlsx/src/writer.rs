//! XLSX writer backed by rust_xlsxwriter

use std::path::Path;

use rust_xlsxwriter::Workbook as OutputWorkbook;
use rust_xlsxwriter::Worksheet as OutputWorksheet;
use sheetmap_core::{Sheet, Workbook};

use crate::error::{XlsxError, XlsxResult};

/// XLSX file writer
pub struct XlsxWriter;

impl XlsxWriter {
    /// Write a workbook to an XLSX file
    pub fn write_file<P: AsRef<Path>>(workbook: &Workbook, path: P) -> XlsxResult<()> {
        let mut output = build(workbook)?;
        output.save(path.as_ref())?;
        Ok(())
    }

    /// Render a workbook to XLSX bytes
    pub fn write_buffer(workbook: &Workbook) -> XlsxResult<Vec<u8>> {
        let mut output = build(workbook)?;
        Ok(output.save_to_buffer()?)
    }
}

fn build(workbook: &Workbook) -> XlsxResult<OutputWorkbook> {
    let mut output = OutputWorkbook::new();

    for sheet in workbook.sheets() {
        let worksheet = output.add_worksheet();
        if let Some(name) = sheet.name() {
            worksheet.set_name(name)?;
        }
        write_sheet(sheet, worksheet)?;
    }

    Ok(output)
}

/// Write every valued cell as a string; empty cells stay absent in the
/// file, matching how the reader brings them back.
fn write_sheet(sheet: &Sheet, worksheet: &mut OutputWorksheet) -> XlsxResult<()> {
    for row in sheet.rows() {
        for cell in row.cells() {
            let text = match cell.value() {
                Some(text) => text,
                None => continue,
            };
            let (r, c) = grid_position(row.index(), cell.column())?;
            worksheet.write_string(r, c, text)?;
        }
    }
    Ok(())
}

/// Map 1-based model coordinates onto the 0-based xlsx grid.
fn grid_position(row: u32, column: u32) -> XlsxResult<(u32, u16)> {
    if row == 0 || column == 0 {
        return Err(XlsxError::OutOfGrid(row, column));
    }
    let c = u16::try_from(column - 1).map_err(|_| XlsxError::OutOfGrid(row, column))?;
    Ok((row - 1, c))
}
