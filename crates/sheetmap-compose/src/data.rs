//! Compose input: records tagged with their target sheet

/// An ordered list of records destined for one sheet.
///
/// The sheet index tags where the records belong; the composer rejects
/// data whose tag does not match the metadata it is composed with.
#[derive(Debug, Clone)]
pub struct SheetData<T> {
    sheet_index: u32,
    records: Vec<T>,
}

impl<T> SheetData<T> {
    /// Create an empty record list targeting the given 1-based sheet index.
    pub fn new(sheet_index: u32) -> Self {
        SheetData {
            sheet_index,
            records: Vec::new(),
        }
    }

    /// Create a record list from existing records.
    pub fn from_records(sheet_index: u32, records: Vec<T>) -> Self {
        SheetData {
            sheet_index,
            records,
        }
    }

    /// Append a record.
    pub fn push(&mut self, record: T) {
        self.records.push(record);
    }

    /// The 1-based sheet index the records target.
    pub fn sheet_index(&self) -> u32 {
        self.sheet_index
    }

    /// The records, in compose order.
    pub fn records(&self) -> &[T] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether there are no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
