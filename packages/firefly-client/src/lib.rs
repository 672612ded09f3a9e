//! Pure Firefly REST API client.
//!
//! Covers the two Firefly endpoints the importer needs: discovering the
//! Farcaster account linked to a Twitter id, and walking a Farcaster user's
//! cast timeline with an opaque cursor.
//!
//! # Example
//!
//! ```rust,ignore
//! use firefly_client::FireflyClient;
//!
//! let client = FireflyClient::new(auth_token);
//!
//! if let Some(fid) = client.farcaster_profile_for_twitter("25073877").await? {
//!     let page = client.farcaster_timeline(&fid, None).await?;
//!     let next = firefly_client::timeline_cursor(&page);
//! }
//! ```

pub mod error;
pub mod types;

pub use error::{FireflyError, Result};

use serde_json::{json, Value};
use tracing::debug;
use types::ProfileInfoEnvelope;

const DEFAULT_BASE_URL: &str = "https://api-dev.firefly.land";

/// Firefly REST client.
#[derive(Clone)]
pub struct FireflyClient {
    client: reqwest::Client,
    auth_token: String,
    base_url: String,
}

impl FireflyClient {
    pub fn new(auth_token: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            auth_token,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the client at a different host (tests, proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Farcaster id linked to a Twitter account, if one exists.
    pub async fn farcaster_profile_for_twitter(&self, twitter_id: &str) -> Result<Option<String>> {
        let url = format!("{}/v2/wallet/profileinfo", self.base_url);
        debug!(%url, twitter_id, "firefly profile lookup");

        let resp = self
            .client
            .get(&url)
            .header("content-type", "application/json")
            .query(&[("twitterId", twitter_id)])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(FireflyError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let envelope: ProfileInfoEnvelope = resp.json().await?;
        Ok(envelope.first_fid())
    }

    /// Fetch one page of a user's cast timeline as a raw payload.
    ///
    /// Page size is fixed upstream. Callers thread [`timeline_cursor`] into
    /// the next call.
    pub async fn farcaster_timeline(&self, fid: &str, cursor: Option<&str>) -> Result<Value> {
        let url = format!("{}/v2/user/timeline/farcaster", self.base_url);
        debug!(%url, fid, "firefly timeline request");

        let mut body = json!({ "fids": [fid] });
        if let Some(cursor) = cursor {
            body["cursor"] = Value::String(cursor.to_string());
        }

        let resp = self
            .client
            .post(&url)
            .header("authorization", &self.auth_token)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(FireflyError::Api {
                status: status.as_u16(),
                message: text,
            });
        }

        Ok(resp.json().await?)
    }
}

/// Continuation cursor of a timeline page (`data.cursor`), `None` at end of
/// stream or on malformed pages.
pub fn timeline_cursor(page: &Value) -> Option<String> {
    let cursor = page.pointer("/data/cursor")?.as_str()?;
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
    fn timeline_cursor_present() {
        let page = json!({ "data": { "casts": [], "cursor": "1700000000" } });
        assert_eq!(timeline_cursor(&page), Some("1700000000".to_string()));
    }

    #[test]
    fn timeline_cursor_absent_or_malformed() {
        assert_eq!(timeline_cursor(&json!({})), None);
        assert_eq!(timeline_cursor(&json!({ "data": {} })), None);
        assert_eq!(timeline_cursor(&json!({ "data": { "cursor": "" } })), None);
        assert_eq!(timeline_cursor(&json!({ "data": { "cursor": null } })), None);
        assert_eq!(timeline_cursor(&json!({ "cursor": "top-level" })), None);
    }
}
