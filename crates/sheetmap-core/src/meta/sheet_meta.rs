//! Sheet-level metadata: layout bounds plus the registered fields

use std::collections::BTreeMap;

use crate::error::{Error, Result};

use super::field::FieldMeta;

/// Metadata for one sheet: the sheet it targets, where data rows start, and
/// the registered fields.
///
/// Rows `1..data_start_row` are header rows; rows from `data_start_row` on
/// hold one record each. Fields keep their declaration order and are also
/// indexed by column for column-ascending traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SheetMeta {
    sheet_index: u32,
    sheet_name: Option<String>,
    data_start_row: u32,
    fields: Vec<FieldMeta>,
    by_column: BTreeMap<u32, usize>,
}

impl SheetMeta {
    /// Create metadata targeting sheet 1, with data rows starting at the
    /// given 1-based row index.
    pub fn new(data_start_row: u32) -> Self {
        SheetMeta {
            sheet_index: 1,
            sheet_name: None,
            data_start_row,
            fields: Vec::new(),
            by_column: BTreeMap::new(),
        }
    }

    /// Target a different 1-based sheet index.
    pub fn with_sheet_index(mut self, sheet_index: u32) -> Self {
        self.sheet_index = sheet_index;
        self
    }

    /// Name the target sheet (applied to composed sheets).
    pub fn with_sheet_name<S: Into<String>>(mut self, name: S) -> Self {
        self.sheet_name = Some(name.into());
        self
    }

    /// Register a field.
    ///
    /// Fails when the field's column is zero, already mapped by another
    /// field, or when the field name is already registered.
    pub fn add_field(&mut self, field: FieldMeta) -> Result<()> {
        if field.column() == 0 {
            return Err(Error::InvalidColumn(field.name().to_string()));
        }
        if let Some(&existing) = self.by_column.get(&field.column()) {
            return Err(Error::DuplicateColumn(
                field.column(),
                self.fields[existing].name().to_string(),
            ));
        }
        if self.field(field.name()).is_some() {
            return Err(Error::DuplicateField(field.name().to_string()));
        }
        self.by_column.insert(field.column(), self.fields.len());
        self.fields.push(field);
        Ok(())
    }

    /// Builder-style [`add_field`](Self::add_field).
    pub fn with_field(mut self, field: FieldMeta) -> Result<Self> {
        self.add_field(field)?;
        Ok(self)
    }

    /// The 1-based sheet index this metadata targets.
    pub fn sheet_index(&self) -> u32 {
        self.sheet_index
    }

    /// The sheet name to apply when composing, if any.
    pub fn sheet_name(&self) -> Option<&str> {
        self.sheet_name.as_deref()
    }

    /// The 1-based index of the first data row.
    pub fn data_start_row(&self) -> u32 {
        self.data_start_row
    }

    /// Number of header rows above the data region.
    pub fn header_row_count(&self) -> u32 {
        self.data_start_row.saturating_sub(1)
    }

    /// Registered fields in declaration order.
    pub fn fields(&self) -> &[FieldMeta] {
        &self.fields
    }

    /// Iterate registered fields in ascending column order.
    pub fn fields_by_column(&self) -> impl Iterator<Item = &FieldMeta> {
        self.by_column.values().map(|&i| &self.fields[i])
    }

    /// The field registered under the given name, if any.
    pub fn field(&self, name: &str) -> Option<&FieldMeta> {
        self.fields.iter().find(|f| f.name() == name)
    }

    /// The field mapped to the given column, if any.
    pub fn field_by_column(&self, column: u32) -> Option<&FieldMeta> {
        self.by_column.get(&column).map(|&i| &self.fields[i])
    }

    /// Highest mapped column, or `None` when no fields are registered.
    pub fn last_column(&self) -> Option<u32> {
        self.by_column.keys().next_back().copied()
    }

    /// Number of registered fields.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::Error;

    fn sample_meta() -> SheetMeta {
        let mut meta = SheetMeta::new(2).with_sheet_name("people");
        meta.add_field(FieldMeta::new("age", 3)).unwrap();
        meta.add_field(FieldMeta::new("name", 1)).unwrap();
        meta
    }

    #[test]
    fn declaration_and_column_order_differ() {
        let meta = sample_meta();
        let declared: Vec<&str> = meta.fields().iter().map(FieldMeta::name).collect();
        assert_eq!(declared, ["age", "name"]);
        let by_column: Vec<&str> = meta.fields_by_column().map(FieldMeta::name).collect();
        assert_eq!(by_column, ["name", "age"]);
    }

    #[test]
    fn lookups() {
        let meta = sample_meta();
        assert_eq!(meta.field("age").map(FieldMeta::column), Some(3));
        assert_eq!(meta.field_by_column(1).map(FieldMeta::name), Some("name"));
        assert_eq!(meta.field_by_column(2), None);
        assert_eq!(meta.last_column(), Some(3));
        assert_eq!(meta.header_row_count(), 1);
    }

    #[test]
    fn zero_column_is_rejected() {
        let mut meta = SheetMeta::new(2);
        let err = meta.add_field(FieldMeta::new("bad", 0)).unwrap_err();
        assert!(matches!(err, Error::InvalidColumn(name) if name == "bad"));
    }

    #[test]
    fn duplicate_column_is_rejected() {
        let mut meta = sample_meta();
        let err = meta.add_field(FieldMeta::new("alias", 1)).unwrap_err();
        assert!(matches!(err, Error::DuplicateColumn(1, name) if name == "name"));
        assert_eq!(meta.field_count(), 2);
    }

    #[test]
    fn duplicate_name_is_rejected() {
        let mut meta = sample_meta();
        let err = meta.add_field(FieldMeta::new("name", 9)).unwrap_err();
        assert!(matches!(err, Error::DuplicateField(name) if name == "name"));
    }

    #[test]
    fn empty_meta_has_no_last_column() {
        let meta = SheetMeta::new(1);
        assert_eq!(meta.last_column(), None);
        assert_eq!(meta.header_row_count(), 0);
        assert_eq!(SheetMeta::new(0).header_row_count(), 0);
    }
}
