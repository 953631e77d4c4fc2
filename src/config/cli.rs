use crate::core::Storage;
use crate::utils::error::{ReplaceError, Result};
use std::fs;
use std::path::Path;

/// Reads and overwrites files on the local filesystem, UTF-8 only.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    fn read_text(&self, path: &Path) -> Result<String> {
        let data = fs::read(path).map_err(|e| ReplaceError::io(path, e))?;
        String::from_utf8(data).map_err(|source| ReplaceError::EncodingError {
            path: path.to_path_buf(),
            source,
        })
    }

    fn write_text(&self, path: &Path, text: &str) -> Result<()> {
        fs::write(path, text).map_err(|e| ReplaceError::io(path, e))
    }
}
