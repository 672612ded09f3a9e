//! Identity lookup and cross-platform link discovery.

use async_trait::async_trait;

use crate::error::Result;

/// A resolved primary-platform account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountProfile {
    /// Stable account identifier
    pub account_id: String,

    /// Profile bio text, used to seed the persona prompt
    pub bio: String,

    /// Avatar image URL
    pub avatar_url: String,
}

/// Resolves a handle to an account on the primary platform.
#[async_trait]
pub trait IdentityResolver: Send + Sync {
    /// Resolve a handle. `Ok(None)` means the account does not exist;
    /// transport failures are errors.
    async fn resolve(&self, handle: &str) -> Result<Option<AccountProfile>>;
}

/// Probes for a linked secondary-platform account.
#[async_trait]
pub trait LinkDiscovery: Send + Sync {
    /// Farcaster id linked to the given primary account, if any.
    async fn linked_farcaster(&self, twitter_id: &str) -> Result<Option<String>>;
}
