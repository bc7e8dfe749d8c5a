mod config;
mod document;
mod format;
mod sample;

pub use config::{
    BackendKind, Config, DEFAULT_COLLECTION, DEFAULT_EMBEDDING_MODEL, DEFAULT_OPENAI_BASE_URL,
    DEFAULT_QDRANT_URL, OpenAiConfig, PLACEHOLDER_OPENAI_KEY, PineconeConfig, ProcessingConfig,
    QdrantConfig, VectorBackend, VectorDatabaseConfig,
};
pub use document::{Chunk, DEFAULT_CATEGORY, Document, EmbeddedChunk};
pub use format::OutputFormat;
pub use sample::{SAMPLE_DOCUMENTS, SampleDocument, find_sample};
