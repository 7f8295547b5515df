//! Reading config documents from disk.
//!
//! Unlike parse failures, a file that cannot be read is fatal to the load: the
//! caller gets an error and no [`Config`](crate::Config) at all.

use std::path::Path;

use crate::error::JsonconfError;

/// Read the whole file at `path` into memory.
pub fn read_document(path: &Path) -> Result<Vec<u8>, JsonconfError> {
    let bytes = std::fs::read(path).map_err(|e| JsonconfError::IoError {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read config file");
    Ok(bytes)
}
