//! Sequential chunk → embed → upload pipeline.

use indicatif::ProgressBar;
use serde::Serialize;
use std::time::{Duration, Instant};

use crate::error::PrepareError;
use crate::models::{Chunk, Document, EmbeddedChunk, ProcessingConfig};
use crate::services::{Embedder, TextChunker, VectorStore};

/// First id handed out in a run (`chunk_1`).
pub const FIRST_CHUNK_ID: u64 = 1;

/// Counts reported after a successful run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PrepareStats {
    pub documents: u64,
    pub chunks_created: u64,
    pub batches: u64,
    pub chunks_uploaded: u64,
    pub backend: String,
    pub duration_ms: u64,
}

/// Drives a whole run: every document is chunked, every chunk embedded one
/// at a time, and the full collection uploaded once at the end.
pub struct Pipeline<'a> {
    chunker: TextChunker,
    embedder: &'a dyn Embedder,
    store: &'a dyn VectorStore,
    batch_size: usize,
    delay: Duration,
    progress: ProgressBar,
    verbose: bool,
}

impl<'a> Pipeline<'a> {
    pub fn new(
        config: &ProcessingConfig,
        embedder: &'a dyn Embedder,
        store: &'a dyn VectorStore,
    ) -> Result<Self, PrepareError> {
        config.validate()?;
        Ok(Self {
            chunker: TextChunker::from_config(config)?,
            embedder,
            store,
            batch_size: config.batch_size,
            delay: Duration::from_millis(config.request_delay_ms),
            progress: ProgressBar::hidden(),
            verbose: false,
        })
    }

    /// Report progress on `progress` instead of a hidden bar.
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = progress;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Override the pause after each embedding call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Verbose-only status line, kept above the progress bar when one is drawn.
    fn log(&self, message: std::fmt::Arguments<'_>) {
        if !self.verbose {
            return;
        }
        if self.progress.is_hidden() {
            eprintln!("{message}");
        } else {
            self.progress.println(message.to_string());
        }
    }

    /// Chunk every document, numbering chunks across the whole set.
    pub fn chunk_documents(&self, documents: &[Document]) -> Vec<Chunk> {
        let mut next_id = FIRST_CHUNK_ID;
        let mut all_chunks = Vec::new();

        for document in documents {
            self.log(format_args!("Processing {}...", document.filename));
            let (chunks, following) = self.chunker.chunk(document, next_id);
            next_id = following;
            all_chunks.extend(chunks);
        }

        all_chunks
    }

    /// Number of logical batches `total` chunks fall into.
    pub fn batch_count(&self, total: usize) -> usize {
        total.div_ceil(self.batch_size)
    }

    /// Embed chunks in order, stopping at the first failure.
    pub async fn embed_chunks(
        &self,
        chunks: Vec<Chunk>,
    ) -> Result<Vec<EmbeddedChunk>, PrepareError> {
        let total_batches = self.batch_count(chunks.len());
        let mut embedded = Vec::with_capacity(chunks.len());

        self.progress.set_length(chunks.len() as u64);

        for (position, chunk) in chunks.into_iter().enumerate() {
            if position % self.batch_size == 0 {
                let batch = position / self.batch_size + 1;
                self.progress
                    .set_message(format!("batch {batch}/{total_batches}"));
                self.log(format_args!("Processing batch {batch}/{total_batches}"));
            }

            let embedding = self
                .embedder
                .embed(&chunk.text)
                .await
                .map_err(|source| PrepareError::Embedding {
                    chunk_id: chunk.id.clone(),
                    source,
                })?;
            embedded.push(chunk.with_embedding(embedding));
            self.progress.inc(1);

            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
        }

        self.progress.finish_and_clear();
        Ok(embedded)
    }

    /// Run the whole pipeline over `documents`.
    pub async fn run(&self, documents: &[Document]) -> Result<PrepareStats, PrepareError> {
        let start_time = Instant::now();

        let chunks = self.chunk_documents(documents);
        let mut stats = PrepareStats {
            documents: documents.len() as u64,
            chunks_created: chunks.len() as u64,
            batches: self.batch_count(chunks.len()) as u64,
            backend: self.store.name().to_string(),
            ..Default::default()
        };

        self.log(format_args!(
            "Created {} text chunks, generating embeddings with {}",
            stats.chunks_created,
            self.embedder.model()
        ));

        let embedded = self.embed_chunks(chunks).await?;

        self.log(format_args!(
            "Generated {} embeddings, uploading to {}...",
            embedded.len(),
            self.store.name()
        ));

        self.store.upload(&embedded).await?;

        stats.chunks_uploaded = embedded.len() as u64;
        stats.duration_ms = start_time.elapsed().as_millis() as u64;
        Ok(stats)
    }
}
