use std::path::Path;

/// Serialization format of a config document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    /// JSON text. The default for in-memory sources.
    #[default]
    Json,
    /// TOML text, converted to the same tree shape as JSON on load.
    Toml,
}

impl Format {
    /// Pick a format from a file extension: `.toml` is TOML, everything else JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Format::Toml,
            _ => Format::Json,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Toml => "toml",
        }
    }
}
