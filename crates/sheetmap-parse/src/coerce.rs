//! Cell-text coercion into typed field values

use std::num::{ParseFloatError, ParseIntError};
use std::str::FromStr;

use rust_decimal::Decimal;
use sheetmap_core::FieldType;

use crate::value::FieldValue;

/// Coerce raw cell text into the declared target type.
///
/// Text passes through untouched; every other type trims first and reads
/// blank content as [`FieldValue::Empty`]. Errors are plain cause
/// messages; the parser wraps them with cell coordinates.
pub(crate) fn coerce(raw: &str, target: FieldType) -> Result<FieldValue, String> {
    if target == FieldType::Text {
        return Ok(FieldValue::Text(raw.to_string()));
    }

    let text = raw.trim();
    if text.is_empty() {
        return Ok(FieldValue::Empty);
    }

    match target {
        FieldType::Int => parse_int(text).map(FieldValue::Int),
        FieldType::Long => parse_int(text).map(FieldValue::Long),
        FieldType::Float => parse_float(text).map(FieldValue::Float),
        FieldType::Double => parse_float(text).map(FieldValue::Double),
        FieldType::Bool => parse_bool(text).map(FieldValue::Bool),
        FieldType::Decimal => parse_decimal(text).map(FieldValue::Decimal),
        FieldType::Text => Ok(FieldValue::Text(raw.to_string())),
    }
}

fn parse_int<N>(text: &str) -> Result<N, String>
where
    N: FromStr<Err = ParseIntError>,
{
    text.parse().map_err(|e: ParseIntError| e.to_string())
}

fn parse_float<N>(text: &str) -> Result<N, String>
where
    N: FromStr<Err = ParseFloatError>,
{
    text.parse().map_err(|e: ParseFloatError| e.to_string())
}

fn parse_bool(text: &str) -> Result<bool, String> {
    if text.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if text.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(format!("not a boolean token: {:?}", text))
    }
}

fn parse_decimal(text: &str) -> Result<Decimal, String> {
    // from_str covers plain notation; scientific forms like "1.0E-20"
    // only parse through from_scientific.
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .map_err(|e| e.to_string())
}
