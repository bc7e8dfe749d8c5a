mod chunker;
mod embedding;
mod pipeline;
mod vector_store;

#[cfg(test)]
pub(crate) mod test_server;

pub use chunker::{TextChunker, chunk_text};
pub use embedding::{Embedder, OpenAiEmbeddingClient};
pub use pipeline::{FIRST_CHUNK_ID, Pipeline, PrepareStats};
pub use vector_store::{
    PineconeBackend, PineconeMetadata, PineconeVector, QdrantBackend, QdrantPayload, QdrantPoint,
    VectorStore, create_backend,
};
