//! Vector store upload adapters.
//!
//! Each backend maps embedded chunks into its own wire shape and sends them
//! in a single request. The backend is picked from configuration through
//! [`create_backend`].

mod pinecone;
mod qdrant;

pub use pinecone::{PineconeBackend, PineconeMetadata, PineconeVector};
pub use qdrant::{QdrantBackend, QdrantPayload, QdrantPoint};

use async_trait::async_trait;
use reqwest::RequestBuilder;
use serde_json::Value;

use crate::error::UploadError;
use crate::models::{EmbeddedChunk, VectorBackend};

/// Destination for embedded chunks.
///
/// All backends must implement this trait so the pipeline can upload
/// without knowing which store it talks to.
#[async_trait]
pub trait VectorStore: Send + Sync {
    /// Upload every chunk in one request, returning the store's JSON response.
    async fn upload(&self, chunks: &[EmbeddedChunk]) -> Result<Value, UploadError>;

    /// Short backend name, for reporting.
    fn name(&self) -> &str;
}

/// Create a vector store backend based on configuration.
pub fn create_backend(backend: &VectorBackend) -> Result<Box<dyn VectorStore>, UploadError> {
    match backend {
        VectorBackend::Pinecone(config) => Ok(Box::new(PineconeBackend::new(config)?)),
        VectorBackend::Qdrant(config) => Ok(Box::new(QdrantBackend::new(config)?)),
    }
}

fn build_client() -> Result<reqwest::Client, UploadError> {
    reqwest::Client::builder()
        .build()
        .map_err(|e| UploadError::Client(e.to_string()))
}

/// Send an upload request and parse the body as JSON.
///
/// Unlike a plain JSON parse, a non-2xx status is an error even when the body
/// is valid JSON, so a rejected upsert never reads as a successful run.
async fn send_json(request: RequestBuilder) -> Result<Value, UploadError> {
    let response = request.send().await?;
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(UploadError::Rejected {
            status: status.as_u16(),
            body,
        });
    }

    parse_response(&body)
}

fn parse_response(body: &str) -> Result<Value, UploadError> {
    serde_json::from_str(body).map_err(|e| UploadError::InvalidResponse(e.to_string()))
}
