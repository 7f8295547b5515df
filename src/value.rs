use std::fmt;

use serde::Serialize;
use serde_json::Value as RawValue;

/// A normalized config value, as returned by [`Config::get`](crate::Config::get).
///
/// Every lookup result, whether it came from the document or from the
/// caller's default, lands in exactly one of these shapes. Callers match on
/// the variant they expect and fall back when it is something else.
///
/// Serializes as the plain JSON value, without a variant tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Any number. Floating-point values are truncated toward zero.
    Int(i64),
    Str(String),
    /// A non-empty array of strings.
    StrList(Vec<String>),
    /// A non-empty array of numbers, each truncated like [`Value::Int`].
    IntList(Vec<i64>),
    /// Everything else, unchanged: booleans, null, objects, empty or
    /// mixed-type arrays.
    Raw(RawValue),
}

impl Value {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_str_list(&self) -> Option<&[String]> {
        match self {
            Value::StrList(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_int_list(&self) -> Option<&[i64]> {
        match self {
            Value::IntList(items) => Some(items),
            _ => None,
        }
    }

    /// Booleans have no variant of their own; they pass through as `Raw`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Raw(raw) => raw.as_bool(),
            _ => None,
        }
    }

    pub fn as_raw(&self) -> Option<&RawValue> {
        match self {
            Value::Raw(raw) => Some(raw),
            _ => None,
        }
    }

    pub fn into_string(self) -> Option<String> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn into_str_list(self) -> Option<Vec<String>> {
        match self {
            Value::StrList(items) => Some(items),
            _ => None,
        }
    }

    pub fn into_int_list(self) -> Option<Vec<i64>> {
        match self {
            Value::IntList(items) => Some(items),
            _ => None,
        }
    }

    /// Short name of the variant, for messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Str(_) => "string",
            Value::StrList(_) => "string list",
            Value::IntList(_) => "int list",
            Value::Raw(_) => "raw",
        }
    }
}

impl From<Value> for RawValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Int(i) => RawValue::from(i),
            Value::Str(s) => RawValue::String(s),
            Value::StrList(items) => RawValue::from(items),
            Value::IntList(items) => RawValue::from(items),
            Value::Raw(raw) => raw,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{i}"),
            Value::Str(s) => write!(f, "{s}"),
            Value::StrList(items) => write!(f, "{}", RawValue::from(items.clone())),
            Value::IntList(items) => write!(f, "{}", RawValue::from(items.clone())),
            Value::Raw(raw) => write!(f, "{raw}"),
        }
    }
}
