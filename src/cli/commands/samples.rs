//! `--create-samples` implementation.

use anyhow::{Result, anyhow};
use std::path::{Path, PathBuf};

use crate::cli::output::get_formatter;
use crate::models::{Config, OutputFormat};
use crate::sources::LocalSource;

/// What `--create-samples` wrote.
#[derive(Debug, Clone)]
pub struct SamplesReport {
    pub config_path: PathBuf,
    pub config_created: bool,
    pub docs_path: PathBuf,
    pub documents_created: Vec<String>,
}

/// Write the sample config and documents, leaving existing files untouched.
pub fn create_samples(config_path: &Path, docs_path: &Path) -> Result<SamplesReport> {
    let config_created = Config::sample()
        .write_if_absent(config_path)
        .map_err(|e| anyhow!("failed to write {}: {e}", config_path.display()))?;

    let documents_created = LocalSource::new(docs_path)
        .create_samples()
        .map_err(|e| anyhow!("failed to write sample documents to {}: {e}", docs_path.display()))?;

    Ok(SamplesReport {
        config_path: config_path.to_path_buf(),
        config_created,
        docs_path: docs_path.to_path_buf(),
        documents_created,
    })
}

pub fn handle_create_samples(config_path: &Path, docs_path: &Path, format: OutputFormat) -> Result<()> {
    let report = create_samples(config_path, docs_path)?;
    print!("{}", get_formatter(format).format_samples(&report));
    Ok(())
}
