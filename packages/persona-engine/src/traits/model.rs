//! Embedding and chat model traits.

use async_trait::async_trait;

use crate::error::Result;

/// Generates vector embeddings for content and queries.
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Generate an embedding for one text.
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Generate embeddings for multiple texts.
    ///
    /// Providers with batch endpoints should override this; the default
    /// falls back to sequential single calls.
    async fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        let mut embeddings = Vec::with_capacity(texts.len());
        for text in texts {
            embeddings.push(self.embed(text).await?);
        }
        Ok(embeddings)
    }
}

/// A chat completion model used to phrase persona replies.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Complete a single system + user turn.
    async fn complete(&self, system: &str, user: &str) -> Result<String>;
}
