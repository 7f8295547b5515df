use std::path::Path;

use crate::config::Config;
use crate::document::Document;
use crate::error::JsonconfError;
use crate::file;
use crate::types::Format;

/// What an in-memory load hands back: always a usable [`Config`], plus the
/// parse error when the config is a fallback.
pub type Loaded = (Config, Option<JsonconfError>);

/// Parse JSON text into a [`Config`].
///
/// On a parse error the returned config is a fallback that answers every
/// lookup with its default, and the error is returned alongside it.
pub fn read_string(text: &str) -> Loaded {
    Loader::new().load_str(text)
}

/// Like [`read_string`], for raw bytes.
pub fn read_bytes(bytes: &[u8]) -> Loaded {
    Loader::new().load_bytes(bytes)
}

/// Read and parse a config file. `.toml` files are parsed as TOML, anything
/// else as JSON.
///
/// A read failure returns `Err` with no config. A parse failure returns
/// `Ok` with a fallback config and the parse error.
pub fn read_file(path: impl AsRef<Path>) -> Result<Loaded, JsonconfError> {
    Loader::new().load_file(path)
}

/// Builder for loading a [`Config`] with non-default options.
///
/// ```ignore
/// let (config, err) = Config::loader()
///     .format(Format::Toml)
///     .load_str(text);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Loader {
    format: Option<Format>,
}

impl Loader {
    pub fn new() -> Self {
        Self { format: None }
    }

    /// Force a document format.
    ///
    /// Without this, files are detected by extension and in-memory sources
    /// are parsed as JSON.
    pub fn format(mut self, format: Format) -> Self {
        self.format = Some(format);
        self
    }

    pub fn load_str(&self, text: &str) -> Loaded {
        self.load_bytes(text.as_bytes())
    }

    pub fn load_bytes(&self, bytes: &[u8]) -> Loaded {
        parse_into_config(bytes, self.format.unwrap_or_default())
    }

    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<Loaded, JsonconfError> {
        let path = path.as_ref();
        let bytes = file::read_document(path)?;
        let format = self.format.unwrap_or_else(|| Format::from_path(path));
        Ok(parse_into_config(&bytes, format))
    }
}

fn parse_into_config(bytes: &[u8], format: Format) -> Loaded {
    match Document::parse(bytes, format) {
        Ok(document) => {
            tracing::debug!(format = format.name(), "parsed config document");
            (Config::from_document(document), None)
        }
        Err(e) => {
            tracing::warn!(
                format = format.name(),
                error = %e,
                "config document failed to parse, lookups will return defaults"
            );
            (Config::fallback(), Some(e))
        }
    }
}
