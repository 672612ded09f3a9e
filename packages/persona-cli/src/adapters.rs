//! Engine trait implementations over the REST clients.
//!
//! The clients stay dependency-free; the glue to the engine's seams lives
//! here, including the mapping of client errors into engine errors.

use async_trait::async_trait;
use serde_json::Value;

use firefly_client::{FireflyClient, FireflyError};
use persona_engine::{
    AccountProfile, EngineError, FetchError, FetchResult, IdentityResolver, LinkDiscovery,
    TimelineSource,
};
use rapidapi_client::{RapidApiClient, RapidApiError};

/// Tweet timeline over the twitter241 API.
pub struct TwitterTimeline {
    client: RapidApiClient,
}

impl TwitterTimeline {
    pub fn new(client: RapidApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TimelineSource for TwitterTimeline {
    async fn fetch_page(
        &self,
        account_id: &str,
        cursor: Option<&str>,
        page_size: u32,
    ) -> FetchResult<Value> {
        self.client
            .user_tweets(account_id, page_size, cursor)
            .await
            .map_err(rapidapi_fetch_error)
    }

    fn next_cursor(&self, page: &Value) -> Option<String> {
        rapidapi_client::bottom_cursor(page)
    }
}

/// Cast timeline over the Firefly API. Page size is fixed upstream, so the
/// requested size is ignored.
pub struct FarcasterTimeline {
    client: FireflyClient,
}

impl FarcasterTimeline {
    pub fn new(client: FireflyClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TimelineSource for FarcasterTimeline {
    async fn fetch_page(
        &self,
        account_id: &str,
        cursor: Option<&str>,
        _page_size: u32,
    ) -> FetchResult<Value> {
        self.client
            .farcaster_timeline(account_id, cursor)
            .await
            .map_err(firefly_fetch_error)
    }

    fn next_cursor(&self, page: &Value) -> Option<String> {
        firefly_client::timeline_cursor(page)
    }
}

/// Handle → account lookup over the twitter241 user endpoint.
pub struct TwitterIdentity {
    client: RapidApiClient,
}

impl TwitterIdentity {
    pub fn new(client: RapidApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl IdentityResolver for TwitterIdentity {
    async fn resolve(&self, handle: &str) -> persona_engine::Result<Option<AccountProfile>> {
        let profile = self
            .client
            .user_by_username(handle)
            .await
            .map_err(|e| EngineError::Identity(Box::new(e)))?;

        Ok(profile.map(|p| AccountProfile {
            account_id: p.rest_id,
            bio: p.description,
            avatar_url: p.profile_image_url,
        }))
    }
}

/// Farcaster link discovery over the Firefly profile endpoint.
pub struct FireflyLinks {
    client: FireflyClient,
}

impl FireflyLinks {
    pub fn new(client: FireflyClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl LinkDiscovery for FireflyLinks {
    async fn linked_farcaster(&self, twitter_id: &str) -> persona_engine::Result<Option<String>> {
        self.client
            .farcaster_profile_for_twitter(twitter_id)
            .await
            .map_err(|e| EngineError::LinkDiscovery(Box::new(e)))
    }
}

fn rapidapi_fetch_error(e: RapidApiError) -> FetchError {
    match e {
        RapidApiError::Api { status, message } => FetchError::Api { status, message },
        other => FetchError::Http(Box::new(other)),
    }
}

fn firefly_fetch_error(e: FireflyError) -> FetchError {
    match e {
        FireflyError::Api { status, message } => FetchError::Api { status, message },
        other => FetchError::Http(Box::new(other)),
    }
}
