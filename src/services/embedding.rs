//! Embedding client for generating text embeddings.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};

use crate::error::EmbeddingError;
use crate::models::OpenAiConfig;

/// Anything that can turn one piece of text into a vector.
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Embed a single text.
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;

    /// Model identifier, for reporting.
    fn model(&self) -> &str;
}

/// Request body for the /embeddings endpoint.
#[derive(Debug, Serialize)]
struct EmbedRequest<'a> {
    input: &'a str,
    model: &'a str,
}

/// Response from the /embeddings endpoint. Either `error` or `data` is set.
#[derive(Debug, Deserialize)]
struct EmbedResponse {
    #[serde(default)]
    error: Option<ProviderError>,
    #[serde(default)]
    data: Vec<EmbeddingData>,
}

#[derive(Debug, Deserialize)]
struct ProviderError {
    #[serde(default)]
    message: String,
}

#[derive(Debug, Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

/// Client for an OpenAI-compatible embeddings API.
#[derive(Debug, Clone)]
pub struct OpenAiEmbeddingClient {
    client: Client,
    endpoint: String,
    model: String,
}

impl OpenAiEmbeddingClient {
    /// Create a new embedding client with the given configuration.
    pub fn new(config: &OpenAiConfig) -> Result<Self, EmbeddingError> {
        let mut headers = HeaderMap::new();
        let auth = format!("Bearer {}", config.api_key.trim());
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&auth).map_err(|e| EmbeddingError::Client(e.to_string()))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| EmbeddingError::Client(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: format!("{}/embeddings", config.base_url.trim_end_matches('/')),
            model: config.model.clone(),
        })
    }

    /// Full URL embedding requests are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Embedder for OpenAiEmbeddingClient {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let request = EmbedRequest {
            input: text,
            model: &self.model,
        };

        let body = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await?
            .text()
            .await?;

        parse_embedding_response(&body)
    }

    fn model(&self) -> &str {
        &self.model
    }
}

/// Extract the first embedding from a response body, surfacing provider errors.
fn parse_embedding_response(body: &str) -> Result<Vec<f32>, EmbeddingError> {
    let response: EmbedResponse =
        serde_json::from_str(body).map_err(|e| EmbeddingError::InvalidResponse(e.to_string()))?;

    if let Some(error) = response.error {
        return Err(EmbeddingError::Provider(error.message));
    }

    response
        .data
        .into_iter()
        .next()
        .map(|entry| entry.embedding)
        .ok_or_else(|| EmbeddingError::InvalidResponse("empty embedding response".to_string()))
}
