//! Filesystem-backed content store.
//!
//! Each persona store is a directory holding one JSON records file - the
//! durable stand-in for a hosted vector database. Writes go through a temp
//! file and a rename so a crash cannot leave a half-written store behind.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use crate::error::{EngineError, Result};
use crate::traits::store::{cosine_similarity, ScoredRecord, StoredRecord, VectorStore};

const RECORDS_FILE: &str = "records.json";

/// JSON-file store addressed by per-persona directory path.
///
/// The struct itself is stateless; all state lives on disk under the paths
/// passed per call, mirroring how the hosted store is addressed.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsVectorStore;

impl FsVectorStore {
    pub fn new() -> Self {
        Self
    }

    fn records_file(store_path: &str) -> PathBuf {
        Path::new(store_path).join(RECORDS_FILE)
    }

    async fn load(store_path: &str) -> Result<Vec<StoredRecord>> {
        match fs::read(Self::records_file(store_path)).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(storage_err),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(storage_err(e)),
        }
    }

    async fn save(store_path: &str, records: &[StoredRecord]) -> Result<()> {
        fs::create_dir_all(store_path).await.map_err(storage_err)?;

        let bytes = serde_json::to_vec(records).map_err(storage_err)?;
        let file = Self::records_file(store_path);
        let tmp = file.with_extension("json.tmp");
        fs::write(&tmp, &bytes).await.map_err(storage_err)?;
        fs::rename(&tmp, &file).await.map_err(storage_err)?;
        Ok(())
    }
}

fn storage_err<E: std::error::Error + Send + Sync + 'static>(e: E) -> EngineError {
    EngineError::Storage(Box::new(e))
}

#[async_trait]
impl VectorStore for FsVectorStore {
    async fn list_ids(&self, store_path: &str) -> Result<HashSet<String>> {
        Ok(Self::load(store_path)
            .await?
            .into_iter()
            .map(|stored| stored.record.external_id)
            .collect())
    }

    async fn append(&self, store_path: &str, records: &[StoredRecord]) -> Result<()> {
        let mut all = Self::load(store_path).await?;
        all.extend_from_slice(records);
        Self::save(store_path, &all).await?;
        debug!(store_path, total = all.len(), "store written");
        Ok(())
    }

    async fn search(&self, store_path: &str, query: &[f32], k: usize) -> Result<Vec<ScoredRecord>> {
        let mut scored: Vec<ScoredRecord> = Self::load(store_path)
            .await?
            .into_iter()
            .map(|stored| ScoredRecord {
                score: cosine_similarity(&stored.embedding, query),
                record: stored.record,
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

    struct TempStore {
        path: String,
    }

    impl TempStore {
        fn new() -> Self {
            let path = std::env::temp_dir()
                .join(format!("persona-store-test-{}", uuid::Uuid::new_v4()))
                .to_string_lossy()
                .into_owned();
            Self { path }
        }
    }

    impl Drop for TempStore {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.path);
        }
    }

    fn stored(id: &str, embedding: Vec<f32>) -> StoredRecord {
        StoredRecord {
            record: ImportRecord::new(id, Platform::Farcaster, format!("cast {id}")),
            embedding,
        }
    }

    #[tokio::test]
    async fn absent_store_reads_as_empty() {
        let tmp = TempStore::new();
        let store = FsVectorStore::new();

        assert!(store.list_ids(&tmp.path).await.unwrap().is_empty());
        assert!(store.search(&tmp.path, &[1.0], 3).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn records_survive_reopen() {
        let tmp = TempStore::new();

        {
            let store = FsVectorStore::new();
            store
                .append(&tmp.path, &[stored("0xaa", vec![1.0, 0.0])])
                .await
                .unwrap();
        }

        let reopened = FsVectorStore::new();
        let ids = reopened.list_ids(&tmp.path).await.unwrap();
        assert!(ids.contains("0xaa"));
    }

    #[tokio::test]
    async fn append_accumulates_across_calls() {
        let tmp = TempStore::new();
        let store = FsVectorStore::new();

        store
            .append(&tmp.path, &[stored("0xaa", vec![1.0, 0.0])])
            .await
            .unwrap();
        store
            .append(&tmp.path, &[stored("0xbb", vec![0.0, 1.0])])
            .await
            .unwrap();

        assert_eq!(store.list_ids(&tmp.path).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn search_ranks_by_similarity() {
        let tmp = TempStore::new();
        let store = FsVectorStore::new();

        store
            .append(
                &tmp.path,
                &[stored("far", vec![0.0, 1.0]), stored("near", vec![1.0, 0.0])],
            )
            .await
            .unwrap();

        let hits = store.search(&tmp.path, &[1.0, 0.0], 1).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].record.external_id, "near");
    }
}
