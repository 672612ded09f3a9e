//! Persona registry trait.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::persona::{ImportStatus, PersonaRecord};

/// The table of known personas, keyed by name.
///
/// The orchestrator reads and writes exactly one row per run. Rows are never
/// deleted here.
#[async_trait]
pub trait PersonaRegistry: Send + Sync {
    /// Look up a persona by name.
    async fn find(&self, name: &str) -> Result<Option<PersonaRecord>>;

    /// Insert a new persona row. Fails if the name is already taken.
    async fn insert(&self, persona: &PersonaRecord) -> Result<()>;

    /// Record the discovered Farcaster id on an existing row.
    async fn set_farcaster_id(&self, name: &str, farcaster_id: &str) -> Result<()>;

    /// Update the import status of an existing row.
    async fn set_status(&self, name: &str, status: ImportStatus) -> Result<()>;

    /// Fully imported personas, oldest first.
    async fn list_ready(&self) -> Result<Vec<PersonaRecord>>;
}
