//! In-memory content store for tests and development.

use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use async_trait::async_trait;

use crate::error::Result;
use crate::traits::store::{cosine_similarity, ScoredRecord, StoredRecord, VectorStore};

/// In-memory store keyed by store path.
///
/// Useful for tests and development; data is lost on restart.
#[derive(Default)]
pub struct MemoryVectorStore {
    stores: RwLock<HashMap<String, Vec<StoredRecord>>>,
}

impl MemoryVectorStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records held at `store_path`.
    pub fn record_count(&self, store_path: &str) -> usize {
        self.stores
            .read()
            .unwrap()
            .get(store_path)
            .map_or(0, Vec::len)
    }

    /// Look up one stored record by external id.
    pub fn find(&self, store_path: &str, external_id: &str) -> Option<StoredRecord> {
        self.stores
            .read()
            .unwrap()
            .get(store_path)?
            .iter()
            .find(|stored| stored.record.external_id == external_id)
            .cloned()
    }
}

#[async_trait]
impl VectorStore for MemoryVectorStore {
    async fn list_ids(&self, store_path: &str) -> Result<HashSet<String>> {
        Ok(self
            .stores
            .read()
            .unwrap()
            .get(store_path)
            .map(|records| {
                records
                    .iter()
                    .map(|stored| stored.record.external_id.clone())
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn append(&self, store_path: &str, records: &[StoredRecord]) -> Result<()> {
        self.stores
            .write()
            .unwrap()
            .entry(store_path.to_string())
            .or_default()
            .extend_from_slice(records);
        Ok(())
    }

    async fn search(&self, store_path: &str, query: &[f32], k: usize) -> Result<Vec<ScoredRecord>> {
        let stores = self.stores.read().unwrap();
        let Some(records) = stores.get(store_path) else {
            return Ok(Vec::new());
        };

        let mut scored: Vec<ScoredRecord> = records
            .iter()
            .map(|stored| ScoredRecord {
                record: stored.record.clone(),
                score: cosine_similarity(&stored.embedding, query),
            })
            .collect();
        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        scored.truncate(k);
        Ok(scored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::record::{ImportRecord, Platform};

    fn stored(id: &str, embedding: Vec<f32>) -> StoredRecord {
        StoredRecord {
            record: ImportRecord::new(id, Platform::Twitter, format!("text {id}")),
            embedding,
        }
    }

    #[tokio::test]
    async fn absent_store_reads_as_empty() {
        let store = MemoryVectorStore::new();
        assert!(store.list_ids("nobody").await.unwrap().is_empty());
        assert!(store.search("nobody", &[1.0], 3).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn append_then_list() {
        let store = MemoryVectorStore::new();
        store
            .append("alice", &[stored("1", vec![1.0, 0.0]), stored("2", vec![0.0, 1.0])])
            .await
            .unwrap();

        let ids = store.list_ids("alice").await.unwrap();
        assert_eq!(ids.len(), 2);
        assert!(ids.contains("1") && ids.contains("2"));
    }

    #[tokio::test]
    async fn search_ranks_by_similarity() {
        let store = MemoryVectorStore::new();
        store
            .append(
                "alice",
                &[
                    stored("far", vec![0.0, 1.0]),
                    stored("near", vec![1.0, 0.1]),
                    stored("exact", vec![1.0, 0.0]),
                ],
            )
            .await
            .unwrap();

        let hits = store.search("alice", &[1.0, 0.0], 2).await.unwrap();

        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].record.external_id, "exact");
        assert_eq!(hits[1].record.external_id, "near");
        assert!(hits[0].score >= hits[1].score);
    }
}
