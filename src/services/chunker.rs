//! Fixed-size text chunking with overlap.

use crate::error::ConfigError;
use crate::models::{Chunk, Document, ProcessingConfig};

/// Split `text` into windows of at most `chunk_size` characters, where each
/// window starts `chunk_size - overlap` characters after the previous one.
///
/// The last window always ends at the end of the text and may be shorter.
/// An overlap that is not smaller than `chunk_size` advances one character
/// per window; [`TextChunker::new`] rejects such sizes up front.
pub fn chunk_text(text: &str, chunk_size: usize, overlap: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let total = chars.len();
    let step = chunk_size.saturating_sub(overlap).max(1);

    let mut chunks = Vec::new();
    let mut start = 0;

    while start < total {
        let end = (start + chunk_size).min(total);
        chunks.push(chars[start..end].iter().collect());

        if end == total {
            break;
        }
        start += step;
    }

    chunks
}

/// Text chunker that turns documents into chunk records.
#[derive(Debug, Clone)]
pub struct TextChunker {
    /// Window size in characters
    chunk_size: usize,
    /// Characters shared between consecutive windows
    overlap: usize,
}

impl TextChunker {
    /// Create a chunker, rejecting sizes that would never advance.
    pub fn new(chunk_size: usize, overlap: usize) -> Result<Self, ConfigError> {
        if chunk_size == 0 {
            return Err(ConfigError::Invalid("chunk size must be positive".to_string()));
        }
        if overlap >= chunk_size {
            return Err(ConfigError::Invalid(format!(
                "chunk overlap ({overlap}) must be smaller than chunk size ({chunk_size})"
            )));
        }
        Ok(Self {
            chunk_size,
            overlap,
        })
    }

    pub fn from_config(config: &ProcessingConfig) -> Result<Self, ConfigError> {
        Self::new(config.chunk_size, config.chunk_overlap)
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn overlap(&self) -> usize {
        self.overlap
    }

    /// Raw windows for `text`.
    pub fn split(&self, text: &str) -> Vec<String> {
        chunk_text(text, self.chunk_size, self.overlap)
    }

    /// Chunk a document. `next_id` is the sequence number for the first chunk;
    /// the returned value is the sequence number for the chunk after the last one.
    pub fn chunk(&self, document: &Document, next_id: u64) -> (Vec<Chunk>, u64) {
        let mut sequence = next_id;
        let chunks = self
            .split(&document.content)
            .into_iter()
            .enumerate()
            .map(|(idx, window)| {
                let text = window.trim().to_string();
                let chunk = Chunk::from_document(document, text, sequence, idx);
                sequence += 1;
                chunk
            })
            .collect();

        (chunks, sequence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

    #[test]
    fn test_alphabet_example() {
        let chunks = chunk_text(ALPHABET, 10, 2);
        assert_eq!(chunks, vec!["abcdefghij", "ijklmnopqr", "qrstuvwxyz"]);
    }

    #[test]
    fn test_empty_text() {
        assert!(chunk_text("", 10, 2).is_empty());
    }

    #[test]
    fn test_short_text_single_chunk() {
        assert_eq!(chunk_text("hello", 10, 2), vec!["hello"]);
        assert_eq!(chunk_text("0123456789", 10, 2), vec!["0123456789"]);
    }

    #[test]
    fn test_final_chunk_may_be_shorter() {
        let chunks = chunk_text("abcdefghijkl", 5, 1);
        assert_eq!(chunks, vec!["abcde", "efghi", "ijkl"]);
    }

    #[test]
    fn test_consecutive_chunks_share_overlap() {
        let text: String = (0..537).map(|i| char::from(b'a' + (i % 26) as u8)).collect();
        for (size, overlap) in [(50, 10), (64, 1), (100, 99), (7, 3)] {
            let chunks = chunk_text(&text, size, overlap);
            for pair in chunks.windows(2) {
                let prev: Vec<char> = pair[0].chars().collect();
                let next: Vec<char> = pair[1].chars().collect();
                assert_eq!(prev.len(), size);
                assert_eq!(&prev[size - overlap..], &next[..overlap.min(next.len())]);
            }
        }
    }

    #[test]
    fn test_removing_overlap_reconstructs_text() {
        let text = "The quick brown fox jumps over the lazy dog. ".repeat(13);
        for (size, overlap) in [(10, 2), (33, 0), (80, 40), (500, 1)] {
            let chunks = chunk_text(&text, size, overlap);
            let mut rebuilt: String = chunks[0].clone();
            for chunk in &chunks[1..] {
                rebuilt.extend(chunk.chars().skip(overlap));
            }
            assert_eq!(rebuilt, text, "size={size} overlap={overlap}");
        }
    }

    #[test]
    fn test_multibyte_characters() {
        let chunks = chunk_text("héllo wörld ✓✓", 6, 2);
        assert_eq!(chunks[0], "héllo ");
        assert_eq!(chunks[1], "o wörl");
        assert!(chunks.last().unwrap().ends_with("✓✓"));
    }

    #[test]
    fn test_oversized_overlap_still_advances() {
        let chunks = chunk_text("abcdefghijkl", 4, 4);
        assert_eq!(chunks.len(), 9);
        assert_eq!(chunks[1], "bcde");
        assert_eq!(chunks.last().unwrap(), "ijkl");
    }

    #[test]
    fn test_new_rejects_overlap_not_smaller_than_size() {
        assert!(TextChunker::new(10, 10).is_err());
        assert!(TextChunker::new(10, 11).is_err());
        assert!(TextChunker::new(0, 0).is_err());
        assert!(TextChunker::new(10, 0).is_ok());
    }

    #[test]
    fn test_chunk_threads_sequence() {
        let chunker = TextChunker::new(10, 2).unwrap();
        let first = Document::new("a.txt", ALPHABET);
        let second = Document::new("b.txt", "short");

        let (chunks_a, next) = chunker.chunk(&first, 1);
        let (chunks_b, next) = chunker.chunk(&second, next);

        assert_eq!(next, 5);
        let ids: Vec<&str> = chunks_a
            .iter()
            .chain(&chunks_b)
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(ids, vec!["chunk_1", "chunk_2", "chunk_3", "chunk_4"]);
        assert_eq!(chunks_a[2].chunk_index, 2);
        assert_eq!(chunks_b[0].chunk_index, 0);
        assert_eq!(chunks_b[0].filename, "b.txt");
        assert_eq!(chunks_b[0].category, "general");
    }

    #[test]
    fn test_chunk_text_is_trimmed() {
        let chunker = TextChunker::new(6, 0).unwrap();
        let doc = Document::new("t.txt", "hello world ");
        let (chunks, _) = chunker.chunk(&doc, 1);
        let texts: Vec<&str> = chunks.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["hello", "world"]);
    }

    #[test]
    fn test_empty_document_keeps_sequence() {
        let chunker = TextChunker::new(10, 2).unwrap();
        let (chunks, next) = chunker.chunk(&Document::new("empty.md", ""), 9);
        assert!(chunks.is_empty());
        assert_eq!(next, 9);
    }
}
