//! The sheet-to-objects parse engine

use ahash::AHashMap;
use sheetmap_core::{Cell, FieldMeta, Sheet, SheetMeta};

use crate::binders::BindFn;
use crate::coerce::coerce;
use crate::error::{CoercionError, ParseError, ParseResult};
use crate::target::FieldTarget;

/// Everything a parse call produces: the records and the cells that
/// failed to coerce.
#[derive(Debug)]
pub struct ParseOutput<T> {
    /// One record per populated data row, in row order. Fields whose cell
    /// failed stay at the record's default.
    pub records: Vec<T>,
    /// Coercion failures in row-then-column order.
    pub errors: Vec<CoercionError>,
}

impl<T> ParseOutput<T> {
    /// Whether every cell coerced cleanly.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Split into records and errors.
    pub fn into_parts(self) -> (Vec<T>, Vec<CoercionError>) {
        (self.records, self.errors)
    }
}

/// Parses a [`Sheet`] back into typed records according to a
/// [`SheetMeta`].
///
/// Each mapped field reads the cell at its column; an absent cell reads
/// as empty text. The value goes through the binder registered for the
/// field name, or is coerced to the field's declared type and delivered
/// via [`FieldTarget::set_field`]. A cell-level failure becomes a
/// [`CoercionError`] and never aborts the pass: every remaining cell and
/// row is still read.
///
/// Only populated rows at or past the metadata's data start row produce
/// records; header rows and wholly absent row indices are skipped.
pub struct SheetParser<T> {
    binders: AHashMap<String, BindFn<T>>,
}

impl<T> SheetParser<T> {
    /// Create a parser with no custom binders.
    pub fn new() -> Self {
        SheetParser {
            binders: AHashMap::new(),
        }
    }

    /// Register a custom binder for a field name, replacing any previous
    /// one.
    pub fn with_binder<S: Into<String>>(mut self, field: S, bind: BindFn<T>) -> Self {
        self.binders.insert(field.into(), bind);
        self
    }
}

impl<T> Default for SheetParser<T> {
    fn default() -> Self {
        SheetParser::new()
    }
}

impl<T: FieldTarget + Default> SheetParser<T> {
    /// Parse `sheet` into records according to `meta`.
    pub fn parse(&self, sheet: &Sheet, meta: &SheetMeta) -> ParseResult<ParseOutput<T>> {
        if sheet.index() != meta.sheet_index() {
            return Err(ParseError::SheetIndexMismatch {
                sheet: sheet.index(),
                meta: meta.sheet_index(),
            });
        }
        if meta.data_start_row() == 0 {
            return Err(ParseError::InvalidDataStartRow(meta.sheet_index()));
        }

        let mut records = Vec::new();
        let mut errors = Vec::new();

        for row in sheet.rows().filter(|r| r.index() >= meta.data_start_row()) {
            let mut record = T::default();
            for field in meta.fields_by_column() {
                let raw = row.cell_at(field.column()).map(Cell::text).unwrap_or("");
                if let Err(cause) = self.bind(&mut record, raw, field) {
                    errors.push(CoercionError {
                        row: row.index(),
                        column: field.column(),
                        field: field.name().to_string(),
                        raw: raw.to_string(),
                        target: field.field_type(),
                        cause,
                    });
                }
            }
            records.push(record);
        }

        Ok(ParseOutput { records, errors })
    }

    fn bind(&self, record: &mut T, raw: &str, field: &FieldMeta) -> Result<(), String> {
        if field.is_required() && raw.trim().is_empty() {
            return Err("required cell is empty".to_string());
        }
        match self.binders.get(field.name()) {
            Some(bind) => bind(record, raw, field),
            None => {
                let value = coerce(raw, field.field_type())?;
                record.set_field(field.name(), value);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use sheetmap_core::{FieldType, Row};

    use super::*;
    use crate::binders;
    use crate::value::FieldValue;

    #[derive(Debug, Default, PartialEq)]
    struct Reading {
        station: Option<String>,
        count: Option<i32>,
        ok: Option<bool>,
    }

    impl FieldTarget for Reading {
        fn set_field(&mut self, field: &str, value: FieldValue) {
            match field {
                "station" => self.station = value.into_text(),
                "count" => self.count = value.as_int(),
                "ok" => self.ok = value.as_bool(),
                _ => {}
            }
        }
    }

    fn reading_meta() -> SheetMeta {
        let mut meta = SheetMeta::new(2);
        meta.add_field(FieldMeta::new("station", 1).with_header(1, "Station"))
            .unwrap();
        meta.add_field(FieldMeta::new("count", 2).with_type(FieldType::Int))
            .unwrap();
        meta.add_field(FieldMeta::new("ok", 3).with_type(FieldType::Bool))
            .unwrap();
        meta
    }

    fn sheet_of(rows: Vec<Vec<&str>>) -> Sheet {
        let mut sheet = Sheet::new(1);
        let mut header = Row::new(1);
        header.add_cell(Cell::new(1, "Station"));
        sheet.add_row(header);
        for (i, cells) in rows.into_iter().enumerate() {
            let mut row = Row::new(2 + i as u32);
            for (j, text) in cells.into_iter().enumerate() {
                row.add_cell(Cell::new(1 + j as u32, text));
            }
            sheet.add_row(row);
        }
        sheet
    }

    #[test]
    fn parses_one_record_per_data_row() {
        let sheet = sheet_of(vec![
            vec!["north", "12", "true"],
            vec!["south", "-3", "false"],
        ]);
        let output: ParseOutput<Reading> =
            SheetParser::new().parse(&sheet, &reading_meta()).unwrap();
        assert!(output.is_clean());
        assert_eq!(
            output.records,
            vec![
                Reading {
                    station: Some("north".to_string()),
                    count: Some(12),
                    ok: Some(true),
                },
                Reading {
                    station: Some("south".to_string()),
                    count: Some(-3),
                    ok: Some(false),
                },
            ]
        );
    }

    #[test]
    fn header_rows_produce_no_records() {
        let sheet = sheet_of(vec![]);
        let output: ParseOutput<Reading> =
            SheetParser::new().parse(&sheet, &reading_meta()).unwrap();
        assert!(output.records.is_empty());
        assert!(output.errors.is_empty());
    }

    #[test]
    fn bad_cell_is_collected_not_fatal() {
        let sheet = sheet_of(vec![
            vec!["north", "dasdasd", "true"],
            vec!["south", "7", "t"],
        ]);
        let output: ParseOutput<Reading> =
            SheetParser::new().parse(&sheet, &reading_meta()).unwrap();

        // both rows still produced records
        assert_eq!(output.records.len(), 2);
        assert_eq!(output.records[0].station, Some("north".to_string()));
        assert_eq!(output.records[0].count, None);
        assert_eq!(output.records[0].ok, Some(true));
        assert_eq!(output.records[1].count, Some(7));
        assert_eq!(output.records[1].ok, None);

        let summary: Vec<(u32, u32, &str)> = output
            .errors
            .iter()
            .map(|e| (e.row, e.column, e.field.as_str()))
            .collect();
        assert_eq!(summary, vec![(2, 2, "count"), (3, 3, "ok")]);
        assert_eq!(output.errors[0].raw, "dasdasd");
        assert_eq!(output.errors[0].target, FieldType::Int);
    }

    #[test]
    fn errors_come_in_row_then_column_order() {
        let sheet = sheet_of(vec![vec!["north", "x", "y"], vec!["south", "z", "w"]]);
        let output: ParseOutput<Reading> =
            SheetParser::new().parse(&sheet, &reading_meta()).unwrap();
        let coords: Vec<(u32, u32)> = output.errors.iter().map(|e| (e.row, e.column)).collect();
        assert_eq!(coords, vec![(2, 2), (2, 3), (3, 2), (3, 3)]);
    }

    #[test]
    fn absent_cells_read_as_empty() {
        // row 2 has a station cell only; counts and flags are absent
        let sheet = sheet_of(vec![vec!["north"]]);
        let output: ParseOutput<Reading> =
            SheetParser::new().parse(&sheet, &reading_meta()).unwrap();
        assert!(output.is_clean());
        assert_eq!(output.records.len(), 1);
        assert_eq!(output.records[0].count, None);
        assert_eq!(output.records[0].ok, None);
    }

    #[test]
    fn missing_row_indices_are_skipped() {
        let mut sheet = Sheet::new(1);
        let mut row = Row::new(5);
        row.add_cell(Cell::new(1, "lone"));
        sheet.add_row(row);
        let output: ParseOutput<Reading> =
            SheetParser::new().parse(&sheet, &reading_meta()).unwrap();
        assert_eq!(output.records.len(), 1);
        assert_eq!(output.records[0].station, Some("lone".to_string()));
    }

    #[test]
    fn required_field_rejects_blank() {
        let mut meta = SheetMeta::new(2);
        meta.add_field(FieldMeta::new("station", 1).required())
            .unwrap();
        let sheet = sheet_of(vec![vec![""]]);
        let output: ParseOutput<Reading> = SheetParser::new().parse(&sheet, &meta).unwrap();
        assert_eq!(output.errors.len(), 1);
        assert_eq!(output.errors[0].cause, "required cell is empty");
        assert_eq!(output.errors[0].row, 2);
    }

    #[test]
    fn custom_binder_wins_over_declared_type() {
        let meta = reading_meta();
        let parser = SheetParser::new().with_binder(
            "ok",
            binders::bool_tokens(|r: &mut Reading, b| r.ok = Some(b), "pass", "failure"),
        );
        let sheet = sheet_of(vec![vec!["north", "1", "pass"]]);
        let output = parser.parse(&sheet, &meta).unwrap();
        assert!(output.is_clean());
        assert_eq!(output.records[0].ok, Some(true));
    }

    #[test]
    fn sheet_index_mismatch_is_rejected() {
        let sheet = Sheet::new(3);
        let err = SheetParser::<Reading>::new()
            .parse(&sheet, &reading_meta())
            .unwrap_err();
        assert!(matches!(
            err,
            ParseError::SheetIndexMismatch { sheet: 3, meta: 1 }
        ));
    }

    #[test]
    fn zero_data_start_row_is_rejected() {
        let meta = SheetMeta::new(0)
            .with_field(FieldMeta::new("station", 1))
            .unwrap();
        let err = SheetParser::<Reading>::new()
            .parse(&Sheet::new(1), &meta)
            .unwrap_err();
        assert!(matches!(err, ParseError::InvalidDataStartRow(1)));
    }

    #[test]
    fn display_names_the_cell() {
        let error = CoercionError {
            row: 2,
            column: 5,
            field: "count".to_string(),
            raw: "x".to_string(),
            target: FieldType::Int,
            cause: "invalid digit found in string".to_string(),
        };
        let text = error.to_string();
        assert!(text.contains("Row 2"));
        assert!(text.contains("column 5"));
        assert!(text.contains("'count'"));
        assert!(text.contains("int"));
    }
}
