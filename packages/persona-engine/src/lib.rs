//! Persona timeline import and retrieval-augmented reply engine.
//!
//! A user picks a public figure; the engine imports that figure's social
//! timeline into a per-persona content store and answers questions in the
//! figure's voice, grounded in the imported posts.
//!
//! # Design
//!
//! - Explicit functions over injected trait objects; no globals, nothing
//!   runs as a side effect of loading a module
//! - One strictly sequential pipeline per import run (the upstream timeline
//!   APIs are rate limited and must not be hit in parallel)
//! - Partial fetch results are valid; ingestion deduplicates by external id,
//!   so every run is safe to repeat
//!
//! # Usage
//!
//! ```rust,ignore
//! use persona_engine::{
//!     import_persona, ImportConfig, ImportDeps, ImportLocks, ImportProgress, NullProgress,
//! };
//!
//! let locks = ImportLocks::new();
//! let progress = ImportProgress { twitter: &NullProgress, farcaster: &NullProgress };
//! let outcome = import_persona(&deps, &locks, "alice", &ImportConfig::new("/var/stores"), &progress).await?;
//! println!("{outcome}");
//! ```
//!
//! # Modules
//!
//! - [`traits`] - seams for timeline, identity, model, store, registry
//! - [`fetch`] - cursor-paginated timeline walking
//! - [`extract`] - platform text extraction
//! - [`pipeline`] - ingestion sink, import orchestrator, responder
//! - [`stores`] - content store implementations
//! - [`registry`] - persona registry implementations
//! - [`testing`] - deterministic mocks

pub mod error;
pub mod extract;
pub mod fetch;
pub mod pipeline;
pub mod registry;
pub mod security;
pub mod stores;
pub mod testing;
pub mod traits;
pub mod types;

#[cfg(feature = "openai")]
pub mod ai;

// Re-export core types at crate root
pub use error::{EngineError, FetchError, FetchResult, Result};
pub use fetch::fetch_all;
pub use pipeline::{
    import_persona, ingest, respond, ImportDeps, ImportLocks, ImportOutcome, ImportProgress,
    IngestOutcome, RespondConfig,
};
pub use traits::{
    identity::{AccountProfile, IdentityResolver, LinkDiscovery},
    model::{ChatModel, Embedder},
    progress::{FnProgress, NullProgress, ProgressSink},
    registry::PersonaRegistry,
    store::{cosine_similarity, ScoredRecord, StoredRecord, VectorStore},
    timeline::TimelineSource,
};
pub use types::{
    config::{FetchConfig, ImportConfig},
    persona::{ImportStatus, PersonaRecord},
    record::{ImportRecord, Platform},
};

// Re-export implementations
pub use registry::MemoryRegistry;
pub use stores::{FsVectorStore, MemoryVectorStore};

#[cfg(feature = "postgres")]
pub use registry::PostgresRegistry;

#[cfg(feature = "openai")]
pub use ai::OpenAI;
