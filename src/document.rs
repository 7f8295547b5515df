//! The parsed config tree and dotted-path navigation over it.
//!
//! Both JSON and TOML sources end up as a single `serde_json::Value` tree, so
//! lookups and normalization only ever deal with one raw representation.

use serde_json::{Map, Number, Value as RawValue};

use crate::error::JsonconfError;
use crate::types::Format;

/// A parsed config document. Read-only once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: RawValue,
}

impl Document {
    pub fn new(root: RawValue) -> Self {
        Self { root }
    }

    /// Parse raw bytes in the given format.
    pub fn parse(bytes: &[u8], format: Format) -> Result<Self, JsonconfError> {
        let root = match format {
            Format::Json => serde_json::from_slice(bytes)?,
            Format::Toml => {
                let text = std::str::from_utf8(bytes)?;
                let table: toml::Table = toml::from_str(text)?;
                toml_table_to_json(table)
            }
        };
        Ok(Self { root })
    }

    pub fn root(&self) -> &RawValue {
        &self.root
    }

    /// Whether a value (possibly `null`) sits at `path`.
    pub fn exists(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    /// Navigate by dotted key path (e.g. `"database.url"`).
    ///
    /// Every segment must name a key of an object; arrays and scalars end the
    /// walk with `None`. Keys are matched exactly.
    pub fn get(&self, path: &str) -> Option<&RawValue> {
        path.split('.')
            .try_fold(&self.root, |current, segment| current.as_object()?.get(segment))
    }
}

fn toml_table_to_json(table: toml::Table) -> RawValue {
    let map: Map<String, RawValue> = table
        .into_iter()
        .map(|(key, value)| (key, toml_to_json(value)))
        .collect();
    RawValue::Object(map)
}

fn toml_to_json(value: toml::Value) -> RawValue {
    match value {
        toml::Value::String(s) => RawValue::String(s),
        toml::Value::Integer(i) => RawValue::Number(i.into()),
        // NaN and infinities have no JSON number form
        toml::Value::Float(f) => Number::from_f64(f).map_or(RawValue::Null, RawValue::Number),
        toml::Value::Boolean(b) => RawValue::Bool(b),
        toml::Value::Datetime(dt) => RawValue::String(dt.to_string()),
        toml::Value::Array(items) => RawValue::Array(items.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(t) => toml_table_to_json(t),
    }
}
