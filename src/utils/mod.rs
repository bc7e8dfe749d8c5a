//! Utility modules.

pub mod file;

pub use file::{DOCUMENT_EXTENSIONS, is_document_file, read_file_content, write_if_absent};
