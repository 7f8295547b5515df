//! Minimal, dynamically typed config lookups. No structs to define, no
//! schema: point at a JSON (or TOML) document and pull values out by dotted
//! key, each with a default.
//!
//! ```ignore
//! let (config, err) = jsonconf::read_file("config.json")?;
//! if let Some(err) = err {
//!     eprintln!("using defaults: {err}");
//! }
//!
//! let port = config.int("tcp.port", 80);
//! let host = config.string("tcp.host", "localhost");
//! let clusters = config.strings("clusters", &["default"]);
//! ```
//!
//! # Lookups
//!
//! [`Config::get`] takes a dotted path and a default, and returns a
//! [`Value`]. If the path is present in the document its value is used,
//! otherwise the default is. Either way the result is normalized into one of
//! five shapes:
//!
//! | Raw value | Result |
//! |-----------|--------|
//! | any number (`10`, `10.0`, `10.9`) | [`Value::Int`], truncated toward zero |
//! | string | [`Value::Str`] |
//! | non-empty array of strings | [`Value::StrList`] |
//! | non-empty array of numbers | [`Value::IntList`] |
//! | anything else | [`Value::Raw`], unchanged |
//!
//! Defaults go through the same rules, so `config.get("port", 80)` is an
//! `Int` whether the document has the key or not. Checking that the variant
//! is the one you expected is up to the caller; the typed helpers
//! ([`Config::int`], [`Config::string`], [`Config::strings`],
//! [`Config::ints`], [`Config::flag`]) do that and fall back to the default on
//! a mismatch.
//!
//! Paths address nested objects only: `"database.pool.size"` walks three
//! object keys. Keys are matched exactly. A key that is present with a `null`
//! value counts as present.
//!
//! # Loading
//!
//! - [`read_string`] / [`read_bytes`] parse in-memory JSON.
//! - [`read_file`] reads a file, picking TOML for `.toml` and JSON otherwise.
//! - [`Config::loader`] returns a [`Loader`] for forcing a [`Format`].
//!
//! A document that fails to parse is not fatal. The loader returns the error
//! together with a fallback [`Config`] that ignores paths and always returns
//! the normalized default, so code that ignores the error keeps working on
//! defaults. A file that cannot be read is fatal: [`read_file`] returns `Err`
//! and no config.
//!
//! # Logging
//!
//! Loading emits `tracing` events (file reads and parse results at `debug`,
//! parse failures at `warn`). Lookups do not log.

pub mod error;
pub mod types;

mod builder;
mod config;
mod document;
mod file;
mod normalize;
mod value;

#[cfg(test)]
mod fixtures;

pub use builder::{Loaded, Loader, read_bytes, read_file, read_string};
pub use config::Config;
pub use document::Document;
pub use error::JsonconfError;
pub use normalize::normalize;
pub use types::Format;
pub use value::Value;
