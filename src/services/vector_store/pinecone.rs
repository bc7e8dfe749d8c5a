//! Pinecone upload backend.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use super::{VectorStore, build_client, send_json};
use crate::error::UploadError;
use crate::models::{EmbeddedChunk, PineconeConfig};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PineconeVector {
    pub id: String,
    pub values: Vec<f32>,
    pub metadata: PineconeMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PineconeMetadata {
    pub content: String,
    pub source: String,
    pub category: String,
    pub filename: String,
    pub chunk_index: usize,
}

#[derive(Debug, Serialize)]
struct UpsertRequest<'a> {
    vectors: &'a [PineconeVector],
}

impl From<&EmbeddedChunk> for PineconeVector {
    fn from(embedded: &EmbeddedChunk) -> Self {
        let chunk = &embedded.chunk;
        Self {
            id: chunk.id.clone(),
            values: embedded.embedding.clone(),
            metadata: PineconeMetadata {
                content: chunk.text.clone(),
                source: chunk.source.clone(),
                category: chunk.category.clone(),
                filename: chunk.filename.clone(),
                chunk_index: chunk.chunk_index,
            },
        }
    }
}

/// Pinecone index addressed by index name and environment.
pub struct PineconeBackend {
    client: Client,
    url: String,
    api_key: String,
}

impl PineconeBackend {
    pub fn new(config: &PineconeConfig) -> Result<Self, UploadError> {
        Ok(Self {
            client: build_client()?,
            url: config.upsert_url(),
            api_key: config.api_key.clone(),
        })
    }

    pub fn to_vectors(chunks: &[EmbeddedChunk]) -> Vec<PineconeVector> {
        chunks.iter().map(PineconeVector::from).collect()
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl VectorStore for PineconeBackend {
    async fn upload(&self, chunks: &[EmbeddedChunk]) -> Result<Value, UploadError> {
        if chunks.is_empty() {
            return Ok(Value::Null);
        }

        let vectors = Self::to_vectors(chunks);
        let request = self
            .client
            .post(&self.url)
            .header("Api-Key", &self.api_key)
            .json(&UpsertRequest { vectors: &vectors });

        send_json(request).await
    }

    fn name(&self) -> &str {
        "pinecone"
    }
}
