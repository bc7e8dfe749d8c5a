//! Error types for the vector data preparation CLI.

use thiserror::Error;

/// Errors related to configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    Missing(String),

    #[error("invalid configuration: {0}")]
    Invalid(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),
}

/// Errors related to reading the document directory.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("documents directory not found: {0}")]
    DocsDirMissing(String),

    #[error("no .txt or .md files found in {0}")]
    NoDocuments(String),

    #[error("failed to read {path}: {message}")]
    ReadError { path: String, message: String },
}

/// Errors related to embedding operations.
#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("embedding provider error: {0}")]
    Provider(String),

    #[error("embedding request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid embedding response: {0}")]
    InvalidResponse(String),

    #[error("failed to build embedding client: {0}")]
    Client(String),
}

/// Errors related to uploading vectors.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("upload request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid upload response: {0}")]
    InvalidResponse(String),

    #[error("upload rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("failed to build upload client: {0}")]
    Client(String),
}

/// Errors raised while running the preparation pipeline.
#[derive(Debug, Error)]
pub enum PrepareError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("error generating embedding for chunk {chunk_id}: {source}")]
    Embedding {
        chunk_id: String,
        #[source]
        source: EmbeddingError,
    },

    #[error("upload error: {0}")]
    Upload(#[from] UploadError),
}

/// Application-level errors that wrap domain errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Source(#[from] SourceError),

    #[error("embedding error: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("upload error: {0}")]
    Upload(#[from] UploadError),

    #[error("{0}")]
    Prepare(#[from] PrepareError),
}
