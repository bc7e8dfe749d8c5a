//! File utilities for reading documents.

use std::fs;
use std::path::Path;

/// Extensions treated as plain-text documents.
pub const DOCUMENT_EXTENSIONS: &[&str] = &["txt", "md"];

/// Check if a path has a recognized document extension.
pub fn is_document_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| DOCUMENT_EXTENSIONS.contains(&ext.as_str()))
}

/// Read a whole file as UTF-8 text.
pub fn read_file_content(path: &Path) -> std::io::Result<String> {
    fs::read_to_string(path)
}

/// Write `content` to `path` unless the file already exists.
/// Returns whether the file was written.
pub fn write_if_absent(path: &Path, content: &str) -> std::io::Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    fs::write(path, content)?;
    Ok(true)
}
