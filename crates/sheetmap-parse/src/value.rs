//! Typed values delivered to parse targets

use rust_decimal::Decimal;

/// A single coerced field value, as delivered to
/// [`FieldTarget::set_field`](crate::FieldTarget::set_field).
///
/// The variant always matches the field's declared
/// [`FieldType`](sheetmap_core::FieldType). `Empty` means the cell held no
/// text for a non-text field; targets usually leave the field at its
/// default in that case.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// No value present
    Empty,
    /// 32-bit signed integer
    Int(i32),
    /// 64-bit signed integer
    Long(i64),
    /// 32-bit binary float
    Float(f32),
    /// 64-bit binary float
    Double(f64),
    /// Boolean
    Bool(bool),
    /// Arbitrary-precision decimal
    Decimal(Decimal),
    /// Raw text
    Text(String),
}

impl FieldValue {
    /// The integer, if this is an [`Int`](FieldValue::Int).
    pub fn as_int(&self) -> Option<i32> {
        match self {
            FieldValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// The integer, if this is a [`Long`](FieldValue::Long).
    pub fn as_long(&self) -> Option<i64> {
        match self {
            FieldValue::Long(v) => Some(*v),
            _ => None,
        }
    }

    /// The float, if this is a [`Float`](FieldValue::Float).
    pub fn as_float(&self) -> Option<f32> {
        match self {
            FieldValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// The float, if this is a [`Double`](FieldValue::Double).
    pub fn as_double(&self) -> Option<f64> {
        match self {
            FieldValue::Double(v) => Some(*v),
            _ => None,
        }
    }

    /// The boolean, if this is a [`Bool`](FieldValue::Bool).
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// The decimal, if this is a [`Decimal`](FieldValue::Decimal).
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            FieldValue::Decimal(v) => Some(*v),
            _ => None,
        }
    }

    /// The text, if this is a [`Text`](FieldValue::Text).
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(v) => Some(v),
            _ => None,
        }
    }

    /// Consume the value, returning owned text for a
    /// [`Text`](FieldValue::Text).
    pub fn into_text(self) -> Option<String> {
        match self {
            FieldValue::Text(v) => Some(v),
            _ => None,
        }
    }

    /// Whether this is [`Empty`](FieldValue::Empty).
    pub fn is_empty(&self) -> bool {
        matches!(self, FieldValue::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_match_their_variant_only() {
        assert_eq!(FieldValue::Int(5).as_int(), Some(5));
        assert_eq!(FieldValue::Long(5).as_int(), None);
        assert_eq!(FieldValue::Text("x".to_string()).as_text(), Some("x"));
        assert_eq!(FieldValue::Bool(true).as_bool(), Some(true));
        assert!(FieldValue::Empty.is_empty());
        assert!(!FieldValue::Int(0).is_empty());
    }
}
