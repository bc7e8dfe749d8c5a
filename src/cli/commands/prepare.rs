//! Default command: chunk, embed and upload a documents directory.

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

use crate::cli::output::get_formatter;
use crate::error::AppError;
use crate::models::{Config, OutputFormat};
use crate::services::{OpenAiEmbeddingClient, Pipeline, PrepareStats, create_backend};
use crate::sources::LocalSource;

#[derive(Debug, Clone)]
pub struct PrepareArgs {
    pub config: PathBuf,
    pub docs: PathBuf,
    pub verbose: bool,
    pub quiet: bool,
}

/// Load and validate the configuration, read the documents, then run the
/// pipeline against the configured embedding provider and vector store.
pub async fn prepare(args: &PrepareArgs, progress: ProgressBar) -> Result<PrepareStats, AppError> {
    let mut config = Config::load(&args.config)?;
    config.apply_env_overrides();
    config.validate()?;

    let source = LocalSource::new(&args.docs);
    let documents = source.load_documents()?;

    if args.verbose {
        eprintln!(
            "Found {} documents to process in {}",
            documents.len(),
            source.root().display()
        );
    }

    let embedder = OpenAiEmbeddingClient::new(&config.openai)?;
    let backend = config.vector_database.backend()?;
    let store = create_backend(&backend)?;

    let stats = Pipeline::new(&config.processing, &embedder, store.as_ref())?
        .with_progress(progress)
        .with_verbose(args.verbose)
        .run(&documents)
        .await?;

    Ok(stats)
}

pub async fn handle_prepare(args: PrepareArgs, format: OutputFormat) -> Result<()> {
    let formatter = get_formatter(format);

    let progress = if args.quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(0);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg} ({eta})",
                )?
                .progress_chars("#>-"),
        );
        pb
    };

    let stats = prepare(&args, progress).await?;
    print!("{}", formatter.format_prepare_stats(&stats));

    Ok(())
}
