//! Reader and writer options for the CSV binding

/// Controls how CSV text is decoded into a sheet
#[derive(Debug, Clone)]
pub struct CsvReadOptions {
    /// Byte separating fields, a comma unless changed
    pub delimiter: u8,
    /// Byte delimiting quoted fields, a double quote unless changed
    pub quote: u8,
    /// Index assigned to the sheet built from the input (default: 1)
    pub sheet_index: u32,
    /// Name assigned to the sheet built from the input (default: none)
    pub sheet_name: Option<String>,
}

impl Default for CsvReadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            sheet_index: 1,
            sheet_name: None,
        }
    }
}

/// Controls how a sheet is encoded as CSV text
#[derive(Debug, Clone)]
pub struct CsvWriteOptions {
    /// Byte separating fields, a comma unless changed
    pub delimiter: u8,
    /// Byte delimiting quoted fields, a double quote unless changed
    pub quote: u8,
    /// Terminator written after each record
    pub line_terminator: LineTerminator,
}

impl Default for CsvWriteOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            line_terminator: LineTerminator::CRLF,
        }
    }
}

/// Record terminator styles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineTerminator {
    /// Bare line feed
    LF,
    /// Carriage return followed by line feed
    CRLF,
    /// Bare carriage return
    CR,
}

impl From<LineTerminator> for csv::Terminator {
    fn from(terminator: LineTerminator) -> Self {
        match terminator {
            LineTerminator::LF => csv::Terminator::Any(b'\n'),
            LineTerminator::CRLF => csv::Terminator::CRLF,
            LineTerminator::CR => csv::Terminator::Any(b'\r'),
        }
    }
}
