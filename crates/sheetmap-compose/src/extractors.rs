//! Custom field extractors for the compose path

use chrono::NaiveDate;
use sheetmap_core::FieldMeta;

/// A custom field extractor: renders one record field as cell text.
///
/// Returning `None` composes an empty cell. Extractors cannot fail; a
/// value that cannot be rendered is simply absent.
pub type ExtractFn<T> = Box<dyn Fn(&T, &FieldMeta) -> Option<String>>;

/// Render a boolean field through a fixed token pair.
///
/// Pair with the parse-side `binders::bool_tokens` using the same tokens
/// to keep round trips faithful.
pub fn bool_tokens<T, F>(get: F, truthy: &str, falsy: &str) -> ExtractFn<T>
where
    F: Fn(&T) -> Option<bool> + 'static,
{
    let truthy = truthy.to_string();
    let falsy = falsy.to_string();
    Box::new(move |record, _| {
        get(record).map(|b| if b { truthy.clone() } else { falsy.clone() })
    })
}

/// Render a date field through a `chrono` format string.
pub fn date<T, F>(get: F, format: &str) -> ExtractFn<T>
where
    F: Fn(&T) -> Option<NaiveDate> + 'static,
{
    let format = format.to_string();
    Box::new(move |record, _| get(record).map(|d| d.format(&format).to_string()))
}
