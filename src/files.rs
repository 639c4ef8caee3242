//! Whole-file reads and writes with the path attached to every failure.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::ConvertError;

pub fn read_file(path: &Path) -> Result<Vec<u8>, ConvertError> {
    let data = std::fs::read(path).map_err(|e| ConvertError::io(path, e))?;
    tracing::debug!(path = %path.display(), bytes = data.len(), "Read file");
    Ok(data)
}

pub fn write_file(path: &Path, data: &[u8]) -> Result<(), ConvertError> {
    std::fs::write(path, data).map_err(|e| ConvertError::io(path, e))?;
    tracing::debug!(path = %path.display(), bytes = data.len(), "Wrote file");
    Ok(())
}

/// `prefix` with `suffix` appended to its last component.
pub fn with_suffix(prefix: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(prefix.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}
