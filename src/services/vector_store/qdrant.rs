//! Qdrant upload backend over the REST API.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use super::{VectorStore, build_client, send_json};
use crate::error::UploadError;
use crate::models::{EmbeddedChunk, QdrantConfig};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QdrantPoint {
    /// 1-based position in the upload
    pub id: u64,
    pub vector: Vec<f32>,
    pub payload: QdrantPayload,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QdrantPayload {
    pub content: String,
    pub source: String,
    pub category: String,
    pub filename: String,
    pub chunk_index: usize,
    pub original_id: String,
}

#[derive(Debug, Serialize)]
struct PointsRequest<'a> {
    points: &'a [QdrantPoint],
}

impl QdrantPoint {
    pub fn new(position: u64, embedded: &EmbeddedChunk) -> Self {
        let chunk = &embedded.chunk;
        Self {
            id: position,
            vector: embedded.embedding.clone(),
            payload: QdrantPayload {
                content: chunk.text.clone(),
                source: chunk.source.clone(),
                category: chunk.category.clone(),
                filename: chunk.filename.clone(),
                chunk_index: chunk.chunk_index,
                original_id: chunk.id.clone(),
            },
        }
    }
}

/// Qdrant collection addressed by base URL and collection name.
pub struct QdrantBackend {
    client: Client,
    url: String,
    api_key: Option<String>,
}

impl QdrantBackend {
    pub fn new(config: &QdrantConfig) -> Result<Self, UploadError> {
        Ok(Self {
            client: build_client()?,
            url: config.points_url(),
            api_key: config.api_key().map(str::to_string),
        })
    }

    pub fn to_points(chunks: &[EmbeddedChunk]) -> Vec<QdrantPoint> {
        (1u64..)
            .zip(chunks)
            .map(|(position, chunk)| QdrantPoint::new(position, chunk))
            .collect()
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl VectorStore for QdrantBackend {
    async fn upload(&self, chunks: &[EmbeddedChunk]) -> Result<Value, UploadError> {
        if chunks.is_empty() {
            return Ok(Value::Null);
        }

        let points = Self::to_points(chunks);
        let mut request = self
            .client
            .put(&self.url)
            .json(&PointsRequest { points: &points });

        if let Some(ref api_key) = self.api_key {
            request = request.header("api-key", api_key);
        }

        send_json(request).await
    }

    fn name(&self) -> &str {
        "qdrant"
    }
}
