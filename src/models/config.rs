use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-ada-002";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_QDRANT_URL: &str = "http://localhost:6333";
pub const DEFAULT_COLLECTION: &str = "customer-support";
pub const PLACEHOLDER_OPENAI_KEY: &str = "your-openai-api-key";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub openai: OpenAiConfig,

    #[serde(default)]
    pub vector_database: VectorDatabaseConfig,

    #[serde(default)]
    pub processing: ProcessingConfig,
}

impl Config {
    /// Load a configuration file. Files ending in `.toml` are parsed as TOML,
    /// everything else as JSON.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.is_file() {
            return Err(ConfigError::Missing(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        let config = if is_toml(path) {
            toml::from_str(&content)?
        } else {
            serde_json::from_str(&content)?
        };
        Ok(config)
    }

    /// Sample configuration written by `--create-samples`.
    pub fn sample() -> Self {
        Self {
            openai: OpenAiConfig {
                api_key: PLACEHOLDER_OPENAI_KEY.to_string(),
                ..Default::default()
            },
            vector_database: VectorDatabaseConfig {
                kind: BackendKind::Pinecone,
                pinecone: Some(PineconeConfig {
                    api_key: "your-pinecone-api-key".to_string(),
                    environment: "your-pinecone-environment".to_string(),
                    index_name: DEFAULT_COLLECTION.to_string(),
                    host: None,
                }),
                qdrant: Some(QdrantConfig {
                    url: DEFAULT_QDRANT_URL.to_string(),
                    api_key: Some("your-qdrant-api-key".to_string()),
                    collection_name: DEFAULT_COLLECTION.to_string(),
                }),
            },
            processing: ProcessingConfig::default(),
        }
    }

    /// Write this configuration to `path` unless a file already exists there.
    /// Returns whether the file was written.
    pub fn write_if_absent(&self, path: &Path) -> Result<bool, ConfigError> {
        if path.exists() {
            return Ok(false);
        }

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let content = if is_toml(path) {
            toml::to_string_pretty(self)?
        } else {
            serde_json::to_string_pretty(self)?
        };
        std::fs::write(path, content)?;
        Ok(true)
    }

    /// Apply credential overrides from the process environment.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    pub(crate) fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(key) = lookup("OPENAI_API_KEY") {
            self.openai.api_key = key;
        }
        if let Some(key) = lookup("PINECONE_API_KEY")
            && let Some(ref mut pinecone) = self.vector_database.pinecone
        {
            pinecone.api_key = key;
        }
        if let Some(ref mut qdrant) = self.vector_database.qdrant {
            if let Some(url) = lookup("QDRANT_URL") {
                qdrant.url = url;
            }
            if let Some(key) = lookup("QDRANT_API_KEY") {
                qdrant.api_key = Some(key);
            }
        }
    }

    /// Check the invariants a run depends on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let api_key = self.openai.api_key.trim();
        if api_key.is_empty() || api_key == PLACEHOLDER_OPENAI_KEY {
            return Err(ConfigError::Invalid(
                "please update the OpenAI API key in the config file".to_string(),
            ));
        }

        self.processing.validate()?;
        self.vector_database.backend()?;
        Ok(())
    }
}

fn is_toml(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "toml")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenAiConfig {
    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_embedding_model")]
    pub model: String,

    #[serde(default = "default_openai_base_url")]
    pub base_url: String,
}

fn default_embedding_model() -> String {
    DEFAULT_EMBEDDING_MODEL.to_string()
}

fn default_openai_base_url() -> String {
    DEFAULT_OPENAI_BASE_URL.to_string()
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_embedding_model(),
            base_url: default_openai_base_url(),
        }
    }
}

/// Which vector store a run uploads to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    #[default]
    Pinecone,
    Qdrant,
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackendKind::Pinecone => write!(f, "pinecone"),
            BackendKind::Qdrant => write!(f, "qdrant"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct VectorDatabaseConfig {
    #[serde(rename = "type", default)]
    pub kind: BackendKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pinecone: Option<PineconeConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qdrant: Option<QdrantConfig>,
}

impl VectorDatabaseConfig {
    /// Resolve the selected backend and its connection parameters.
    pub fn backend(&self) -> Result<VectorBackend, ConfigError> {
        match self.kind {
            BackendKind::Pinecone => self
                .pinecone
                .clone()
                .map(VectorBackend::Pinecone)
                .ok_or_else(|| missing_section(self.kind)),
            BackendKind::Qdrant => self
                .qdrant
                .clone()
                .map(VectorBackend::Qdrant)
                .ok_or_else(|| missing_section(self.kind)),
        }
    }
}

fn missing_section(kind: BackendKind) -> ConfigError {
    ConfigError::Invalid(format!(
        "vectorDatabase.type is \"{kind}\" but the \"{kind}\" section is missing"
    ))
}

/// A selected vector store together with its connection parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VectorBackend {
    Pinecone(PineconeConfig),
    Qdrant(QdrantConfig),
}

impl VectorBackend {
    pub fn kind(&self) -> BackendKind {
        match self {
            VectorBackend::Pinecone(_) => BackendKind::Pinecone,
            VectorBackend::Qdrant(_) => BackendKind::Qdrant,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PineconeConfig {
    pub api_key: String,

    pub environment: String,

    pub index_name: String,

    /// Full index host, overriding the one derived from index and environment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
}

impl PineconeConfig {
    pub fn upsert_url(&self) -> String {
        let host = match self.host {
            Some(ref host) if !host.trim().is_empty() => host.trim_end_matches('/').to_string(),
            _ => format!(
                "https://{}-{}.svc.{}.pinecone.io",
                self.index_name, self.environment, self.environment
            ),
        };
        format!("{host}/vectors/upsert")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QdrantConfig {
    #[serde(default = "default_qdrant_url")]
    pub url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(default = "default_collection")]
    pub collection_name: String,
}

fn default_qdrant_url() -> String {
    DEFAULT_QDRANT_URL.to_string()
}

fn default_collection() -> String {
    DEFAULT_COLLECTION.to_string()
}

impl QdrantConfig {
    pub fn points_url(&self) -> String {
        format!(
            "{}/collections/{}/points",
            self.url.trim_end_matches('/'),
            self.collection_name
        )
    }

    /// API key to send, if one is set and non-empty.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingConfig {
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    #[serde(default = "default_chunk_overlap")]
    pub chunk_overlap: usize,

    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Pause after every embedding call, in milliseconds.
    #[serde(default = "default_request_delay_ms")]
    pub request_delay_ms: u64,
}

fn default_chunk_size() -> usize {
    1000
}

fn default_chunk_overlap() -> usize {
    200
}

fn default_batch_size() -> usize {
    10
}

fn default_request_delay_ms() -> u64 {
    100
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
            chunk_overlap: default_chunk_overlap(),
            batch_size: default_batch_size(),
            request_delay_ms: default_request_delay_ms(),
        }
    }
}

impl ProcessingConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chunk_size == 0 {
            return Err(ConfigError::Invalid(
                "processing.chunkSize must be positive".to_string(),
            ));
        }
        if self.chunk_overlap >= self.chunk_size {
            return Err(ConfigError::Invalid(format!(
                "processing.chunkOverlap ({}) must be smaller than processing.chunkSize ({})",
                self.chunk_overlap, self.chunk_size
            )));
        }
        if self.batch_size == 0 {
            return Err(ConfigError::Invalid(
                "processing.batchSize must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn valid_config() -> Config {
        let mut config = Config::sample();
        config.openai.api_key = "sk-test".to_string();
        config
    }

    #[test]
    fn test_processing_config_default() {
        let config = ProcessingConfig::default();
        assert_eq!(config.chunk_size, 1000);
        assert_eq!(config.chunk_overlap, 200);
        assert_eq!(config.batch_size, 10);
        assert_eq!(config.request_delay_ms, 100);
    }

    #[test]
    fn test_parse_camel_case_json() {
        let json = r#"{
            "openai": { "apiKey": "sk-abc", "model": "text-embedding-3-small" },
            "vectorDatabase": {
                "type": "qdrant",
                "qdrant": { "url": "http://qdrant:6333", "collectionName": "docs" }
            },
            "processing": { "chunkSize": 500, "chunkOverlap": 50, "batchSize": 5 }
        }"#;
        let config: Config = serde_json::from_str(json).unwrap();

        assert_eq!(config.openai.api_key, "sk-abc");
        assert_eq!(config.openai.base_url, DEFAULT_OPENAI_BASE_URL);
        assert_eq!(config.processing.chunk_size, 500);
        assert_eq!(config.processing.request_delay_ms, 100);
        match config.vector_database.backend().unwrap() {
            VectorBackend::Qdrant(q) => {
                assert_eq!(q.points_url(), "http://qdrant:6333/collections/docs/points");
                assert_eq!(q.api_key(), None);
            }
            other => panic!("expected qdrant, got {other:?}"),
        }
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = Config::load(&dir.path().join("config.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Missing(_)));
    }

    #[test]
    fn test_sample_round_trips_through_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");

        assert!(Config::sample().write_if_absent(&path).unwrap());
        assert!(!Config::sample().write_if_absent(&path).unwrap());

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.openai.api_key, PLACEHOLDER_OPENAI_KEY);
        assert_eq!(loaded.vector_database.kind, BackendKind::Pinecone);

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"vectorDatabase\""));
        assert!(raw.contains("\"indexName\""));
    }

    #[test]
    fn test_load_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[openai]
apiKey = "sk-toml"

[vectorDatabase]
type = "qdrant"

[vectorDatabase.qdrant]
url = "http://localhost:6333"
collectionName = "kb"
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.openai.api_key, "sk-toml");
        assert_eq!(config.vector_database.kind, BackendKind::Qdrant);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_placeholder_key_rejected() {
        let err = Config::sample().validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let mut config = valid_config();
        config.openai.api_key = "  ".to_string();
        assert!(config.validate().is_err());

        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_overlap_must_be_smaller_than_chunk_size() {
        let mut config = valid_config();
        config.processing.chunk_overlap = config.processing.chunk_size;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        config.processing.chunk_size = 0;
        config.processing.chunk_overlap = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_batch_size_rejected() {
        let mut config = valid_config();
        config.processing.batch_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_selected_backend_section_required() {
        let mut config = valid_config();
        config.vector_database.kind = BackendKind::Qdrant;
        config.vector_database.qdrant = None;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_pinecone_upsert_url() {
        let pinecone = PineconeConfig {
            api_key: "k".to_string(),
            environment: "us-east1-gcp".to_string(),
            index_name: "support".to_string(),
            host: None,
        };
        assert_eq!(
            pinecone.upsert_url(),
            "https://support-us-east1-gcp.svc.us-east1-gcp.pinecone.io/vectors/upsert"
        );

        let overridden = PineconeConfig {
            host: Some("https://support-abc.svc.pinecone.io/".to_string()),
            ..pinecone
        };
        assert_eq!(
            overridden.upsert_url(),
            "https://support-abc.svc.pinecone.io/vectors/upsert"
        );
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::sample();
        config.apply_overrides(|key| match key {
            "OPENAI_API_KEY" => Some("sk-env".to_string()),
            "QDRANT_URL" => Some("http://remote:6333".to_string()),
            "PINECONE_API_KEY" => Some(String::new()),
            _ => None,
        });

        assert_eq!(config.openai.api_key, "sk-env");
        assert_eq!(
            config.vector_database.qdrant.as_ref().unwrap().url,
            "http://remote:6333"
        );
        assert_eq!(
            config.vector_database.pinecone.as_ref().unwrap().api_key,
            "your-pinecone-api-key"
        );
    }
}
