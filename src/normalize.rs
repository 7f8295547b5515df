//! Folding raw tree values into the five [`Value`] shapes.
//!
//! The same rules run for document values and for caller defaults, so a
//! lookup returns the same shape whether or not the path existed.

use serde_json::{Number, Value as RawValue};

use crate::value::Value;

/// Normalize a raw value.
///
/// - numbers become [`Value::Int`], truncating any fractional part
/// - strings become [`Value::Str`]
/// - non-empty arrays of strings become [`Value::StrList`]
/// - non-empty arrays of numbers become [`Value::IntList`]
/// - anything else is returned as [`Value::Raw`]
///
/// An array's kind is taken from its first element. If a later element has a
/// different kind, the whole array is returned as `Raw` rather than partially
/// converted.
pub fn normalize(raw: RawValue) -> Value {
    match raw {
        RawValue::Number(n) => Value::Int(truncate(&n)),
        RawValue::String(s) => Value::Str(s),
        RawValue::Array(items) => normalize_array(items),
        other => Value::Raw(other),
    }
}

fn normalize_array(items: Vec<RawValue>) -> Value {
    if items.is_empty() {
        return Value::Raw(RawValue::Array(items));
    }
    let first = &items[0];
    let strings = first.is_string() && items.iter().all(RawValue::is_string);
    let numbers = first.is_number() && items.iter().all(RawValue::is_number);

    if strings {
        Value::StrList(
            items
                .into_iter()
                .filter_map(|item| match item {
                    RawValue::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
        )
    } else if numbers {
        Value::IntList(
            items
                .iter()
                .filter_map(|item| match item {
                    RawValue::Number(n) => Some(truncate(n)),
                    _ => None,
                })
                .collect(),
        )
    } else {
        Value::Raw(RawValue::Array(items))
    }
}

/// Integers are taken exactly. Floats (and `u64` past `i64::MAX`) go through
/// a saturating cast, which truncates toward zero.
fn truncate(n: &Number) -> i64 {
    match n.as_i64() {
        Some(i) => i,
        None => n.as_f64().map_or(0, |f| f as i64),
    }
}
