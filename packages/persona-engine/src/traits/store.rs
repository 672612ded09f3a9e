//! Content store trait - per-persona vector storage.

use std::collections::HashSet;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::record::ImportRecord;

/// An embedded record as persisted in a store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredRecord {
    /// The record as extracted
    pub record: ImportRecord,

    /// Its embedding vector
    pub embedding: Vec<f32>,
}

/// A search hit with its similarity score.
#[derive(Debug, Clone)]
pub struct ScoredRecord {
    pub record: ImportRecord,
    pub score: f32,
}

/// Persistent, append-friendly vector storage addressed by per-persona path.
///
/// A store that does not exist yet behaves as empty; the first append
/// creates it. During an import run the ingestion sink is the sole writer
/// for a given path.
#[async_trait]
pub trait VectorStore: Send + Sync {
    /// External ids already present at `store_path`.
    async fn list_ids(&self, store_path: &str) -> Result<HashSet<String>>;

    /// Append embedded records. Callers deduplicate before appending; the
    /// store itself never removes or overwrites a record.
    async fn append(&self, store_path: &str, records: &[StoredRecord]) -> Result<()>;

    /// The `k` records most similar to the query embedding, best first.
    async fn search(&self, store_path: &str, query: &[f32], k: usize) -> Result<Vec<ScoredRecord>>;
}

/// Cosine similarity between two vectors.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cosine_similarity_basics() {
        let a = vec![1.0, 0.0, 0.0];
        assert!((cosine_similarity(&a, &a) - 1.0).abs() < 0.001);

        let orthogonal = vec![0.0, 1.0, 0.0];
        assert!(cosine_similarity(&a, &orthogonal).abs() < 0.001);

        let opposite = vec![-1.0, 0.0, 0.0];
        assert!((cosine_similarity(&a, &opposite) + 1.0).abs() < 0.001);
    }

    #[test]
    fn cosine_similarity_degenerate_inputs() {
        assert_eq!(cosine_similarity(&[], &[]), 0.0);
        assert_eq!(cosine_similarity(&[1.0], &[1.0, 2.0]), 0.0);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]), 0.0);
    }
}
