//! Local documents directory.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::SourceError;
use crate::models::{Document, SAMPLE_DOCUMENTS, find_sample};
use crate::utils::file::{is_document_file, read_file_content, write_if_absent};

/// A flat directory of `.txt` / `.md` documents.
#[derive(Debug)]
pub struct LocalSource {
    /// Directory to scan
    root: PathBuf,
}

impl LocalSource {
    /// Create a new local source.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Collect document files directly under the root, sorted by file name.
    pub fn collect_files(&self) -> Result<Vec<PathBuf>, SourceError> {
        if !self.root.is_dir() {
            return Err(SourceError::DocsDirMissing(self.root.display().to_string()));
        }

        let mut files = Vec::new();

        for entry in WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| SourceError::ReadError {
                path: self.root.display().to_string(),
                message: e.to_string(),
            })?;
            let path = entry.path();

            if path.is_file() && is_document_file(path) {
                files.push(path.to_path_buf());
            }
        }

        if files.is_empty() {
            return Err(SourceError::NoDocuments(self.root.display().to_string()));
        }

        Ok(files)
    }

    /// Read a file and create a Document. Files named like a built-in sample
    /// take that sample's labels.
    pub fn read_document(&self, path: &Path) -> Result<Document, SourceError> {
        let content = read_file_content(path).map_err(|e| SourceError::ReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        let document = match find_sample(&filename) {
            Some(sample) => Document::new(filename, content).with_labels(
                Some(sample.source.to_string()),
                Some(sample.category.to_string()),
            ),
            None => Document::new(filename, content),
        };

        Ok(document)
    }

    /// Read every document in the directory.
    pub fn load_documents(&self) -> Result<Vec<Document>, SourceError> {
        self.collect_files()?
            .iter()
            .map(|path| self.read_document(path))
            .collect()
    }

    /// Write the built-in sample documents into the root, creating it if
    /// needed. Existing files are left alone. Returns the filenames written.
    pub fn create_samples(&self) -> std::io::Result<Vec<String>> {
        std::fs::create_dir_all(&self.root)?;

        let mut created = Vec::new();
        for sample in SAMPLE_DOCUMENTS {
            if write_if_absent(&self.root.join(sample.filename), sample.content)? {
                created.push(sample.filename.to_string());
            }
        }
        Ok(created)
    }
}
