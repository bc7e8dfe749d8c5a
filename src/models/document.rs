use serde::{Deserialize, Serialize};

pub const DEFAULT_CATEGORY: &str = "general";

/// A text file read from the documents directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub filename: String,
    pub content: String,
    pub source: Option<String>,
    pub category: Option<String>,
}

impl Document {
    pub fn new(filename: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            content: content.into(),
            source: None,
            category: None,
        }
    }

    pub fn with_labels(mut self, source: Option<String>, category: Option<String>) -> Self {
        self.source = source;
        self.category = category;
        self
    }

    /// Source label, falling back to the filename.
    pub fn source_label(&self) -> &str {
        self.source.as_deref().unwrap_or(&self.filename)
    }

    /// Category label, falling back to `general`.
    pub fn category_label(&self) -> &str {
        self.category.as_deref().unwrap_or(DEFAULT_CATEGORY)
    }
}

/// One window of a document's text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chunk {
    pub id: String,
    pub text: String,
    pub source: String,
    pub category: String,
    pub filename: String,
    pub chunk_index: usize,
}

impl Chunk {
    pub fn generate_id(sequence: u64) -> String {
        format!("chunk_{sequence}")
    }

    pub fn from_document(
        document: &Document,
        text: String,
        sequence: u64,
        chunk_index: usize,
    ) -> Self {
        Self {
            id: Self::generate_id(sequence),
            text,
            source: document.source_label().to_string(),
            category: document.category_label().to_string(),
            filename: document.filename.clone(),
            chunk_index,
        }
    }

    pub fn with_embedding(self, embedding: Vec<f32>) -> EmbeddedChunk {
        EmbeddedChunk {
            chunk: self,
            embedding,
        }
    }
}

/// A chunk paired with its embedding vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddedChunk {
    #[serde(flatten)]
    pub chunk: Chunk,
    pub embedding: Vec<f32>,
}
