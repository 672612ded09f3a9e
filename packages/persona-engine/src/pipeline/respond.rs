//! Retrieval-augmented persona replies.

use tracing::{debug, warn};

use crate::error::Result;
use crate::pipeline::prompts::format_response_prompt;
use crate::traits::model::{ChatModel, Embedder};
use crate::traits::store::VectorStore;
use crate::types::persona::PersonaRecord;

/// Retrieval settings for one reply.
#[derive(Debug, Clone, Copy)]
pub struct RespondConfig {
    /// Timeline excerpts to retrieve per question
    pub k: usize,

    /// Relevance floor below which a warning is logged
    pub min_score: f32,
}

impl Default for RespondConfig {
    fn default() -> Self {
        Self { k: 3, min_score: 0.7 }
    }
}

/// Answer `question` in the persona's voice, grounded in stored posts.
///
/// Weak retrieval (no hit above `min_score`) is logged but still answered
/// from whatever context was found; the model decides what to make of it.
pub async fn respond(
    chat: &dyn ChatModel,
    embedder: &dyn Embedder,
    store: &dyn VectorStore,
    persona: &PersonaRecord,
    question: &str,
    config: &RespondConfig,
) -> Result<String> {
    let query = embedder.embed(question).await?;
    let hits = store.search(&persona.store_path, &query, config.k).await?;

    if hits.first().map_or(true, |hit| hit.score < config.min_score) {
        warn!(persona = %persona.name, "no strong timeline matches for question");
    }
    debug!(persona = %persona.name, hits = hits.len(), "retrieved reply context");

    let context = hits
        .iter()
        .map(|hit| hit.record.text.as_str())
        .collect::<Vec<_>>()
        .join("\n\n---\n\n");

    let prompt = format_response_prompt(&context, question);
    chat.complete(&persona.persona_prompt, &prompt).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::ingest::ingest;
    use crate::stores::MemoryVectorStore;
    use crate::testing::{MockChatModel, MockEmbedder};
    use crate::types::record::{ImportRecord, Platform};

    fn persona() -> PersonaRecord {
        PersonaRecord::new("alice", "42")
            .with_persona_prompt("You are alice, a test persona")
            .with_store_path("alice")
    }

    #[tokio::test]
    async fn grounds_the_reply_in_stored_posts() {
        let store = MemoryVectorStore::new();
        let embedder = MockEmbedder::new();
        let chat = MockChatModel::with_reply("sounds good");

        ingest(
            &store,
            &embedder,
            "alice",
            vec![ImportRecord::new("1", Platform::Twitter, "rust is great")],
        )
        .await
        .unwrap();

        let reply = respond(&chat, &embedder, &store, &persona(), "thoughts on rust?", &RespondConfig::default())
            .await
            .unwrap();

        assert_eq!(reply, "sounds good");
        let calls = chat.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "You are alice, a test persona");
        assert!(calls[0].1.contains("rust is great"));
        assert!(calls[0].1.contains("thoughts on rust?"));
    }

    #[tokio::test]
    async fn answers_even_with_an_empty_store() {
        let store = MemoryVectorStore::new();
        let embedder = MockEmbedder::new();
        let chat = MockChatModel::with_reply("no idea");

        let reply = respond(&chat, &embedder, &store, &persona(), "anything?", &RespondConfig::default())
            .await
            .unwrap();

        assert_eq!(reply, "no idea");
    }

    #[tokio::test]
    async fn retrieves_at_most_k_excerpts() {
        let store = MemoryVectorStore::new();
        let embedder = MockEmbedder::new();
        let chat = MockChatModel::with_reply("ok");

        let records = (0..10)
            .map(|i| ImportRecord::new(i.to_string(), Platform::Twitter, format!("post {i}")))
            .collect();
        ingest(&store, &embedder, "alice", records).await.unwrap();

        let config = RespondConfig { k: 2, ..RespondConfig::default() };
        respond(&chat, &embedder, &store, &persona(), "hi", &config).await.unwrap();

        let prompt = chat.calls()[0].1.clone();
        let excerpts = prompt.matches("post ").count();
        assert_eq!(excerpts, 2);
    }
}
