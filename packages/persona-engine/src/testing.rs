//! Deterministic mocks for exercising the pipelines without network or
//! model calls.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;
use sha2::{Digest, Sha256};

use crate::error::{EngineError, FetchError, FetchResult, Result};
use crate::traits::identity::{AccountProfile, IdentityResolver, LinkDiscovery};
use crate::traits::model::{ChatModel, Embedder};
use crate::traits::progress::ProgressSink;
use crate::traits::timeline::TimelineSource;

/// Timeline source serving a fixed page sequence.
///
/// Pages are handed out in order, one per request. The cursor lives under a
/// top-level `"cursor"` key in each mock page. Requests past the configured
/// pages (or at the configured failure index) return errors, which the fetch
/// loop treats as end-of-walk.
#[derive(Default)]
pub struct MockTimeline {
    pages: Vec<Value>,
    fail_at: Option<usize>,
    requests: AtomicUsize,
    cursors: Mutex<Vec<Option<String>>>,
}

impl MockTimeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a page to the sequence.
    pub fn with_page(mut self, page: Value) -> Self {
        self.pages.push(page);
        self
    }

    /// Fail the request with the given zero-based index.
    pub fn failing_at(mut self, index: usize) -> Self {
        self.fail_at = Some(index);
        self
    }

    /// Total requests served so far.
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    /// Restart the sequence from the first page.
    pub fn reset_requests(&self) {
        self.requests.store(0, Ordering::SeqCst);
    }

    /// Cursor argument of every request, in order.
    pub fn cursors(&self) -> Vec<Option<String>> {
        self.cursors.lock().unwrap().clone()
    }
}

#[async_trait]
impl TimelineSource for MockTimeline {
    async fn fetch_page(
        &self,
        _account_id: &str,
        cursor: Option<&str>,
        _page_size: u32,
    ) -> FetchResult<Value> {
        let index = self.requests.fetch_add(1, Ordering::SeqCst);
        self.cursors
            .lock()
            .unwrap()
            .push(cursor.map(str::to_string));

        if self.fail_at == Some(index) {
            return Err(FetchError::Api {
                status: 500,
                message: "mock page failure".into(),
            });
        }
        self.pages
            .get(index)
            .cloned()
            .ok_or_else(|| FetchError::Malformed("mock page sequence exhausted".into()))
    }

    fn next_cursor(&self, page: &Value) -> Option<String> {
        page.get("cursor").and_then(Value::as_str).map(str::to_string)
    }
}

/// Identity resolver with a fixed handle → profile table.
#[derive(Default)]
pub struct MockIdentity {
    profiles: HashMap<String, AccountProfile>,
}

impl MockIdentity {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resolvable handle.
    pub fn with_profile(mut self, handle: impl Into<String>, profile: AccountProfile) -> Self {
        self.profiles.insert(handle.into(), profile);
        self
    }
}

#[async_trait]
impl IdentityResolver for MockIdentity {
    async fn resolve(&self, handle: &str) -> Result<Option<AccountProfile>> {
        Ok(self.profiles.get(handle).cloned())
    }
}

/// Link discovery with a fixed twitter id → fid table; optionally failing.
#[derive(Default)]
pub struct MockLinkDiscovery {
    links: HashMap<String, String>,
    failing: bool,
}

impl MockLinkDiscovery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a known link.
    pub fn with_link(mut self, twitter_id: impl Into<String>, fid: impl Into<String>) -> Self {
        self.links.insert(twitter_id.into(), fid.into());
        self
    }

    /// A discovery service whose every call errors.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl LinkDiscovery for MockLinkDiscovery {
    async fn linked_farcaster(&self, twitter_id: &str) -> Result<Option<String>> {
        if self.failing {
            return Err(EngineError::LinkDiscovery("mock discovery failure".into()));
        }
        Ok(self.links.get(twitter_id).cloned())
    }
}

/// Embedder producing deterministic hash-seeded vectors.
///
/// The same text always embeds to the same vector, so similarity search in
/// tests is stable without any model.
pub struct MockEmbedder {
    dim: usize,
    embedded: AtomicUsize,
}

impl Default for MockEmbedder {
    fn default() -> Self {
        Self::new()
    }
}

impl MockEmbedder {
    pub fn new() -> Self {
        Self {
            dim: 8,
            embedded: AtomicUsize::new(0),
        }
    }

    /// Set the embedding dimension.
    pub fn with_dim(mut self, dim: usize) -> Self {
        self.dim = dim;
        self
    }

    /// Total texts embedded across all calls.
    pub fn embedded_count(&self) -> usize {
        self.embedded.load(Ordering::SeqCst)
    }

    fn deterministic(&self, text: &str) -> Vec<f32> {
        let mut hasher = Sha256::new();
        hasher.update(text.as_bytes());
        let hash = hasher.finalize();

        (0..self.dim)
            .map(|i| {
                let byte = hash[i % hash.len()] as f32;
                byte / 127.5 - 1.0
            })
            .collect()
    }
}

#[async_trait]
impl Embedder for MockEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        self.embedded.fetch_add(1, Ordering::SeqCst);
        Ok(self.deterministic(text))
    }
}

/// Embedder whose every call errors, for abort-path tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingEmbedder;

#[async_trait]
impl Embedder for FailingEmbedder {
    async fn embed(&self, _text: &str) -> Result<Vec<f32>> {
        Err(EngineError::Embedding("mock embedding failure".into()))
    }
}

/// Chat model returning a canned reply and recording every call.
#[derive(Default)]
pub struct MockChatModel {
    reply: String,
    calls: Mutex<Vec<(String, String)>>,
}

impl MockChatModel {
    /// Model that always answers with `reply`.
    pub fn with_reply(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Every (system, user) pair this model was called with.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatModel for MockChatModel {
    async fn complete(&self, system: &str, user: &str) -> Result<String> {
        self.calls
            .lock()
            .unwrap()
            .push((system.to_string(), user.to_string()));
        Ok(self.reply.clone())
    }
}

/// Progress sink recording every update.
#[derive(Default)]
pub struct RecordingProgress {
    updates: Mutex<Vec<(u8, String)>>,
}

impl RecordingProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every (percent, message) update, in order.
    pub fn updates(&self) -> Vec<(u8, String)> {
        self.updates.lock().unwrap().clone()
    }
}

impl ProgressSink for RecordingProgress {
    fn report(&self, percent: u8, message: &str) {
        self.updates
            .lock()
            .unwrap()
            .push((percent, message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_embedder_is_deterministic() {
        let embedder = MockEmbedder::new();

        let a = embedder.embed("same text").await.unwrap();
        let b = embedder.embed("same text").await.unwrap();
        let c = embedder.embed("other text").await.unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.len(), 8);
        assert_eq!(embedder.embedded_count(), 3);
    }

    #[tokio::test]
    async fn mock_embedder_values_are_bounded() {
        let embedder = MockEmbedder::new().with_dim(64);
        let embedding = embedder.embed("bounds").await.unwrap();

        assert_eq!(embedding.len(), 64);
        assert!(embedding.iter().all(|v| (-1.0..=1.0).contains(v)));
    }
}
