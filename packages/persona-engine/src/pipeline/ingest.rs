//! Deduplicating ingestion sink.
//!
//! Loads extracted records into a persona's content store, skipping ids the
//! store already holds. Only the new partition is embedded, which keeps
//! repeat imports cheap and makes the whole import pipeline safe to re-run.

use tracing::info;

use crate::error::Result;
use crate::traits::model::Embedder;
use crate::traits::store::{StoredRecord, VectorStore};
use crate::types::record::ImportRecord;

/// Result of one ingest call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestOutcome {
    /// Records embedded and appended by this call
    pub created: usize,

    /// Records skipped because their id was already stored
    pub skipped: usize,
}

/// Ingest records into the store at `store_path`.
///
/// After this returns, the store holds the id-deduplicated union of its
/// prior contents and `records`; nothing is overwritten or removed. When the
/// same id appears more than once in `records`, the first occurrence wins.
/// An absent store reads as empty, so the first ingest seeds it with all
/// given records.
///
/// Embedding and storage failures propagate. The caller can simply
/// re-invoke: already-stored ids will be skipped on the retry.
pub async fn ingest(
    store: &dyn VectorStore,
    embedder: &dyn Embedder,
    store_path: &str,
    records: Vec<ImportRecord>,
) -> Result<IngestOutcome> {
    let mut present = store.list_ids(store_path).await?;

    let mut fresh = Vec::new();
    let mut skipped = 0;
    for record in records {
        if present.insert(record.external_id.clone()) {
            fresh.push(record);
        } else {
            skipped += 1;
        }
    }

    if fresh.is_empty() {
        info!(store_path, skipped, "nothing new to ingest");
        return Ok(IngestOutcome { created: 0, skipped });
    }

    let texts: Vec<&str> = fresh.iter().map(|r| r.text.as_str()).collect();
    let embeddings = embedder.embed_batch(&texts).await?;

    let stored: Vec<StoredRecord> = fresh
        .into_iter()
        .zip(embeddings)
        .map(|(record, embedding)| StoredRecord { record, embedding })
        .collect();
    store.append(store_path, &stored).await?;

    let created = stored.len();
    info!(store_path, created, skipped, "ingest complete");
    Ok(IngestOutcome { created, skipped })
}
