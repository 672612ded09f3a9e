//! Pure twitter241 RapidAPI client.
//!
//! A minimal client for the twitter241 timeline API on RapidAPI. Supports
//! looking up a user by handle and walking their tweet timeline with an
//! opaque cursor.
//!
//! # Example
//!
//! ```rust,ignore
//! use rapidapi_client::RapidApiClient;
//!
//! let client = RapidApiClient::new("your-rapidapi-key".into());
//!
//! if let Some(profile) = client.user_by_username("jack").await? {
//!     let page = client.user_tweets(&profile.rest_id, 20, None).await?;
//!     let next = rapidapi_client::bottom_cursor(&page);
//! }
//! ```

pub mod error;
pub mod types;

pub use error::{RapidApiError, Result};
pub use types::UserProfile;

use serde_json::Value;
use tracing::debug;
use types::UserEnvelope;

const DEFAULT_BASE_URL: &str = "https://twitter241.p.rapidapi.com";
const RAPIDAPI_HOST: &str = "twitter241.p.rapidapi.com";

/// twitter241 REST client.
#[derive(Clone)]
pub struct RapidApiClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl RapidApiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the client at a different host (tests, proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<reqwest::Response> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "twitter241 request");

        let resp = self
            .client
            .get(&url)
            .header("X-RapidAPI-Key", &self.api_key)
            .header("X-RapidAPI-Host", RAPIDAPI_HOST)
            .query(query)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(RapidApiError::Api {
                status: status.as_u16(),
                message: body,
            });
        }
        Ok(resp)
    }

    /// Look up a user by handle. Returns `None` when the account does not
    /// exist.
    pub async fn user_by_username(&self, username: &str) -> Result<Option<UserProfile>> {
        let resp = self.get("/user", &[("username", username)]).await?;
        let envelope: UserEnvelope = resp.json().await?;
        Ok(envelope.into_profile())
    }

    /// Fetch one timeline page as a raw payload.
    ///
    /// The page structure varies too much across tweet kinds to type;
    /// callers extract what they need and thread [`bottom_cursor`] into the
    /// next call.
    pub async fn user_tweets(
        &self,
        user_id: &str,
        count: u32,
        cursor: Option<&str>,
    ) -> Result<Value> {
        let count = count.to_string();
        let mut query: Vec<(&str, &str)> = vec![("user", user_id), ("count", &count)];
        if let Some(cursor) = cursor {
            query.push(("cursor", cursor));
        }

        let resp = self.get("/user-tweets", &query).await?;
        Ok(resp.json().await?)
    }
}

/// Continuation cursor of a timeline page (`cursor.bottom`), `None` when the
/// page is the last one or does not carry the expected field.
pub fn bottom_cursor(page: &Value) -> Option<String> {
    let cursor = page.pointer("/cursor/bottom")?.as_str()?;
    if cursor.is_empty() {
        None
    } else {
        Some(cursor.to_string())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn bottom_cursor_present() {
        let page = json!({ "cursor": { "bottom": "DAABCgABGg", "top": "DAACCgAB" } });
        assert_eq!(bottom_cursor(&page), Some("DAABCgABGg".to_string()));
    }

    #[test]
    fn bottom_cursor_absent_or_malformed() {
        assert_eq!(bottom_cursor(&json!({})), None);
        assert_eq!(bottom_cursor(&json!({ "cursor": {} })), None);
        assert_eq!(bottom_cursor(&json!({ "cursor": { "bottom": "" } })), None);
        assert_eq!(bottom_cursor(&json!({ "cursor": { "bottom": 7 } })), None);
        assert_eq!(bottom_cursor(&json!({ "cursor": "flat" })), None);
    }
}
