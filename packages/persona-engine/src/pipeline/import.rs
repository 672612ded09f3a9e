//! Cross-platform import orchestration.
//!
//! Drives the Twitter fetch→extract→ingest pipeline, probes for a linked
//! Farcaster account, optionally drives the Farcaster pipeline, and flips
//! the persona's persisted status to fully imported exactly once at the end.

use std::collections::HashSet;
use std::fmt;
use std::sync::Mutex;

use tracing::{info, warn};

use crate::error::{EngineError, Result};
use crate::extract;
use crate::fetch::fetch_all;
use crate::pipeline::ingest::ingest;
use crate::traits::identity::{IdentityResolver, LinkDiscovery};
use crate::traits::model::Embedder;
use crate::traits::progress::ProgressSink;
use crate::traits::registry::PersonaRegistry;
use crate::traits::store::VectorStore;
use crate::traits::timeline::TimelineSource;
use crate::types::config::ImportConfig;
use crate::types::persona::{ImportStatus, PersonaRecord};

/// Collaborators for one import run.
pub struct ImportDeps<'a> {
    pub identity: &'a dyn IdentityResolver,
    pub twitter: &'a dyn TimelineSource,
    pub links: &'a dyn LinkDiscovery,
    pub farcaster: &'a dyn TimelineSource,
    pub embedder: &'a dyn Embedder,
    pub store: &'a dyn VectorStore,
    pub registry: &'a dyn PersonaRegistry,
}

/// Per-platform progress channels, so a UI can render two bars.
pub struct ImportProgress<'a> {
    pub twitter: &'a dyn ProgressSink,
    pub farcaster: &'a dyn ProgressSink,
}

/// In-process mutual exclusion over persona names.
///
/// A persona's registry row and content store are owned by a single
/// in-flight import; a second import of the same persona fails fast with
/// [`EngineError::ImportInProgress`] instead of racing. Different personas
/// do not contend.
#[derive(Debug, Default)]
pub struct ImportLocks {
    active: Mutex<HashSet<String>>,
}

impl ImportLocks {
    pub fn new() -> Self {
        Self::default()
    }

    fn acquire(&self, persona: &str) -> Result<ImportLockGuard<'_>> {
        let mut active = self.active.lock().unwrap();
        if !active.insert(persona.to_string()) {
            return Err(EngineError::ImportInProgress {
                persona: persona.to_string(),
            });
        }
        Ok(ImportLockGuard {
            locks: self,
            persona: persona.to_string(),
        })
    }
}

struct ImportLockGuard<'a> {
    locks: &'a ImportLocks,
    persona: String,
}

impl Drop for ImportLockGuard<'_> {
    fn drop(&mut self) {
        self.locks.active.lock().unwrap().remove(&self.persona);
    }
}

/// Result of an import run, rendered to the user as a plain sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportOutcome {
    /// The persona was already fully imported; nothing was fetched.
    AlreadyImported,

    /// The run completed and the persona is now fully imported.
    Imported {
        tweets_stored: usize,
        casts_stored: usize,
        farcaster_id: Option<String>,
    },
}

impl fmt::Display for ImportOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportOutcome::AlreadyImported => {
                write!(f, "Persona already exists and is fully imported")
            }
            ImportOutcome::Imported {
                tweets_stored,
                casts_stored,
                farcaster_id,
            } => {
                write!(f, "Imported {tweets_stored} new tweets")?;
                if farcaster_id.is_some() {
                    write!(f, " and {casts_stored} new casts")?;
                }
                Ok(())
            }
        }
    }
}

/// Run a full import for `handle`.
///
/// A missing registry row is created as not-imported after the handle
/// resolves; an unresolvable handle fails the run with
/// [`EngineError::AccountNotFound`]. The row is marked fully imported
/// exactly once, after every triggered pipeline has returned. A failure
/// anywhere leaves the persisted status untouched, so the caller can retry
/// from scratch and ingestion dedup keeps the retry cheap.
///
/// Fetch-side failures are absorbed as partial results (see
/// [`fetch_all`]); a partial secondary import still completes the run.
/// Link-discovery failures degrade to "no link found".
pub async fn import_persona(
    deps: &ImportDeps<'_>,
    locks: &ImportLocks,
    handle: &str,
    config: &ImportConfig,
    progress: &ImportProgress<'_>,
) -> Result<ImportOutcome> {
    let _guard = locks.acquire(handle)?;

    let existing = deps.registry.find(handle).await?;
    if let Some(persona) = &existing {
        if persona.status == ImportStatus::FullyImported {
            info!(handle, "persona already fully imported, skipping");
            return Ok(ImportOutcome::AlreadyImported);
        }
    }

    let persona = match existing {
        Some(persona) => persona,
        None => {
            let profile = deps.identity.resolve(handle).await?.ok_or_else(|| {
                EngineError::AccountNotFound {
                    handle: handle.to_string(),
                }
            })?;

            let persona = PersonaRecord::new(handle, &profile.account_id)
                .with_avatar_url(&profile.avatar_url)
                .with_persona_prompt(format!("You are {}", profile.bio))
                .with_post_url_prefix(format!("https://x.com/{handle}"))
                .with_store_path(config.store_path_for(handle));
            deps.registry.insert(&persona).await?;
            persona
        }
    };

    progress
        .twitter
        .report(1, &format!("Found Twitter account @{handle}"));

    info!(handle, twitter_id = %persona.twitter_id, "importing tweets");
    let pages = fetch_all(
        deps.twitter,
        &persona.twitter_id,
        &config.fetch,
        progress.twitter,
    )
    .await;
    let records = extract::twitter::extract_records(&pages);

    let fetched_percent = (pages.len() * 100 / config.fetch.max_pages.max(1)) as u8;
    progress
        .twitter
        .report(fetched_percent, "Embedding new tweets, please wait...");
    let tweets = ingest(deps.store, deps.embedder, &persona.store_path, records).await?;
    progress.twitter.report(
        100,
        &format!(
            "Stored {} new tweets ({} already present)",
            tweets.created, tweets.skipped
        ),
    );

    let farcaster_id = match deps.links.linked_farcaster(&persona.twitter_id).await {
        Ok(fid) => fid,
        Err(e) => {
            warn!(handle, error = %e, "link discovery failed, continuing without Farcaster");
            None
        }
    };

    let mut casts_stored = 0;
    match &farcaster_id {
        Some(fid) => {
            // Record the link as soon as it is known; a partial cast import
            // must not lose the discovered account.
            deps.registry.set_farcaster_id(handle, fid).await?;
            progress
                .farcaster
                .report(0, "Found Farcaster profile, importing casts...");

            info!(handle, farcaster_id = %fid, "importing casts");
            let pages = fetch_all(deps.farcaster, fid, &config.fetch, progress.farcaster).await;
            let records = extract::farcaster::extract_records(&pages);
            let casts = ingest(deps.store, deps.embedder, &persona.store_path, records).await?;
            casts_stored = casts.created;
            progress.farcaster.report(
                100,
                &format!(
                    "Stored {} new casts ({} already present)",
                    casts.created, casts.skipped
                ),
            );
        }
        None => {
            progress
                .farcaster
                .report(100, "No linked Farcaster profile found");
        }
    }

    deps.registry
        .set_status(handle, ImportStatus::FullyImported)
        .await?;
    info!(
        handle,
        tweets = tweets.created,
        casts = casts_stored,
        "import complete"
    );

    Ok(ImportOutcome::Imported {
        tweets_stored: tweets.created,
        casts_stored,
        farcaster_id,
    })
}
