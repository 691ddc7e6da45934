//! The object-to-sheet composition engine

use ahash::AHashMap;
use sheetmap_core::{Cell, FieldMeta, Row, Sheet, SheetMeta};

use crate::data::SheetData;
use crate::error::{ComposeError, ComposeResult};
use crate::extractors::ExtractFn;
use crate::source::FieldSource;

/// Composes typed records into a [`Sheet`] according to a [`SheetMeta`].
///
/// Field values are rendered through the extractor registered for the
/// field name, falling back to [`FieldSource::field_text`]. Every column
/// in `1..=last_column` appears in every composed row; unmapped columns
/// and absent values are padded with empty cells so the grid stays dense.
///
/// ```rust
/// use sheetmap_compose::{FieldSource, SheetComposer, SheetData};
/// use sheetmap_core::{FieldMeta, SheetMeta};
///
/// struct Item {
///     label: String,
/// }
///
/// impl FieldSource for Item {
///     fn field_text(&self, field: &str) -> Option<String> {
///         match field {
///             "label" => Some(self.label.clone()),
///             _ => None,
///         }
///     }
/// }
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let meta = SheetMeta::new(2)
///     .with_field(FieldMeta::new("label", 1).with_header(1, "Label"))?;
/// let data = SheetData::from_records(1, vec![Item { label: "first".into() }]);
///
/// let sheet = SheetComposer::new().compose(&meta, &data)?;
/// assert_eq!(sheet.row_count(), 2);
/// assert_eq!(sheet.row_at(2).and_then(|r| r.cell_at(1)).and_then(|c| c.value()), Some("first"));
/// # Ok(())
/// # }
/// ```
pub struct SheetComposer<T> {
    extractors: AHashMap<String, ExtractFn<T>>,
}

impl<T> SheetComposer<T> {
    /// Create a composer with no custom extractors.
    pub fn new() -> Self {
        SheetComposer {
            extractors: AHashMap::new(),
        }
    }

    /// Register a custom extractor for a field name, replacing any
    /// previous one.
    pub fn with_extractor<S: Into<String>>(mut self, field: S, extract: ExtractFn<T>) -> Self {
        self.extractors.insert(field.into(), extract);
        self
    }
}

impl<T> Default for SheetComposer<T> {
    fn default() -> Self {
        SheetComposer::new()
    }
}

impl<T: FieldSource> SheetComposer<T> {
    /// Compose one sheet from `data` according to `meta`.
    ///
    /// Header rows `1..data_start_row` come first, then one data row per
    /// record starting at `data_start_row`. With no records the sheet
    /// holds only its header rows.
    pub fn compose(&self, meta: &SheetMeta, data: &SheetData<T>) -> ComposeResult<Sheet> {
        if data.sheet_index() != meta.sheet_index() {
            return Err(ComposeError::SheetIndexMismatch {
                data: data.sheet_index(),
                meta: meta.sheet_index(),
            });
        }
        if meta.data_start_row() == 0 {
            return Err(ComposeError::InvalidDataStartRow(meta.sheet_index()));
        }
        let last_column = meta
            .last_column()
            .ok_or(ComposeError::NoFields(meta.sheet_index()))?;

        let mut sheet = match meta.sheet_name() {
            Some(name) => Sheet::with_name(meta.sheet_index(), name),
            None => Sheet::new(meta.sheet_index()),
        };

        for index in 1..meta.data_start_row() {
            sheet.add_row(header_row(meta, index, last_column));
        }

        for (i, record) in data.records().iter().enumerate() {
            let index = meta.data_start_row() + i as u32;
            sheet.add_row(self.data_row(meta, record, index, last_column));
        }

        Ok(sheet)
    }

    fn data_row(&self, meta: &SheetMeta, record: &T, index: u32, last_column: u32) -> Row {
        let mut row = Row::new(index);
        for column in 1..=last_column {
            let cell = match meta.field_by_column(column) {
                Some(field) => match self.extract(record, field) {
                    Some(text) => Cell::new(column, text),
                    None => Cell::empty(column),
                },
                None => Cell::empty(column),
            };
            row.add_cell(cell);
        }
        row
    }

    fn extract(&self, record: &T, field: &FieldMeta) -> Option<String> {
        match self.extractors.get(field.name()) {
            Some(extract) => extract(record, field),
            None => record.field_text(field.name()),
        }
    }
}

fn header_row(meta: &SheetMeta, index: u32, last_column: u32) -> Row {
    let mut row = Row::new(index);
    for column in 1..=last_column {
        let cell = meta
            .field_by_column(column)
            .and_then(|field| field.header(index))
            .map(|header| Cell::new(column, header.text()))
            .unwrap_or_else(|| Cell::empty(column));
        row.add_cell(cell);
    }
    row
}
