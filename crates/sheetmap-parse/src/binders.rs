//! Custom field binders for the parse path

use chrono::NaiveDate;
use sheetmap_core::FieldMeta;

/// A custom field binder: stores one raw cell text into a record.
///
/// The error is a bare cause message; the parser wraps it with cell
/// coordinates into a [`CoercionError`](crate::CoercionError). Binders see
/// the raw text exactly as the cell holds it.
pub type BindFn<T> = Box<dyn Fn(&mut T, &str, &FieldMeta) -> Result<(), String>>;

/// Bind a boolean field through a fixed token pair (ASCII
/// case-insensitive).
///
/// Blank text is "no value" and leaves the record untouched; any token
/// outside the pair is an error. Pair with the compose-side
/// `extractors::bool_tokens` using the same tokens to keep round trips
/// faithful.
pub fn bool_tokens<T, F>(set: F, truthy: &str, falsy: &str) -> BindFn<T>
where
    F: Fn(&mut T, bool) + 'static,
{
    let truthy = truthy.to_string();
    let falsy = falsy.to_string();
    Box::new(move |record, raw, _| {
        let text = raw.trim();
        if text.is_empty() {
            Ok(())
        } else if text.eq_ignore_ascii_case(&truthy) {
            set(record, true);
            Ok(())
        } else if text.eq_ignore_ascii_case(&falsy) {
            set(record, false);
            Ok(())
        } else {
            Err(format!(
                "expected {:?} or {:?}, got {:?}",
                truthy, falsy, text
            ))
        }
    })
}

/// Bind a date field through a `chrono` format string.
///
/// Blank text is "no value"; anything else must match the format.
pub fn date<T, F>(set: F, format: &str) -> BindFn<T>
where
    F: Fn(&mut T, NaiveDate) + 'static,
{
    let format = format.to_string();
    Box::new(move |record, raw, _| {
        let text = raw.trim();
        if text.is_empty() {
            return Ok(());
        }
        match NaiveDate::parse_from_str(text, &format) {
            Ok(day) => {
                set(record, day);
                Ok(())
            }
            Err(e) => Err(e.to_string()),
        }
    })
}
