//! Timeline source trait - one paginated platform API.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::FetchResult;

/// A paginated timeline API for one platform.
///
/// Implementations wrap a concrete REST client. Pages travel as raw JSON
/// payloads; the engine interprets them only through [`next_cursor`] and the
/// platform extractors, so upstream schema drift stays contained here.
///
/// [`next_cursor`]: TimelineSource::next_cursor
#[async_trait]
pub trait TimelineSource: Send + Sync {
    /// Fetch one page of the account's timeline.
    ///
    /// `cursor` is the opaque continuation token from the previous page,
    /// `None` for the first request. Sources with a fixed upstream page size
    /// may ignore `page_size`.
    async fn fetch_page(
        &self,
        account_id: &str,
        cursor: Option<&str>,
        page_size: u32,
    ) -> FetchResult<Value>;

    /// Pull the continuation cursor out of a page payload.
    ///
    /// `None` - including for malformed pages - means end of stream.
    fn next_cursor(&self, page: &Value) -> Option<String>;
}
