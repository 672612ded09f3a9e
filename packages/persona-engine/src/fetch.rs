//! Cursor-paginated timeline walking.
//!
//! One sequential loop per platform: the upstream APIs are rate limited, so
//! pages are requested one at a time with a fixed courtesy delay in between.

use serde_json::Value;
use tracing::{debug, warn};

use crate::traits::progress::ProgressSink;
use crate::traits::timeline::TimelineSource;
use crate::types::config::FetchConfig;

/// Walk an account's timeline page by page until the cursor runs out, the
/// page budget is exhausted, or a request fails.
///
/// A failed request stops the walk early; pages fetched before the failure
/// are kept and returned. Partial results are valid input for extraction, so
/// this function never errors. Progress is reported once per fetched page as
/// `pages * 100 / max_pages`.
pub async fn fetch_all<S>(
    source: &S,
    account_id: &str,
    config: &FetchConfig,
    progress: &dyn ProgressSink,
) -> Vec<Value>
where
    S: TimelineSource + ?Sized,
{
    let mut pages: Vec<Value> = Vec::new();
    let mut cursor: Option<String> = None;

    for page_number in 1..=config.max_pages {
        let payload = match source
            .fetch_page(account_id, cursor.as_deref(), config.page_size)
            .await
        {
            Ok(payload) => payload,
            Err(e) => {
                warn!(
                    account_id,
                    page = page_number,
                    error = %e,
                    "page request failed, keeping pages fetched so far"
                );
                break;
            }
        };

        cursor = source.next_cursor(&payload);
        pages.push(payload);

        let percent = (pages.len() * 100 / config.max_pages) as u8;
        progress.report(
            percent,
            &format!("Fetched page {} of {}", page_number, config.max_pages),
        );

        match cursor.as_deref() {
            Some(next) if !next.is_empty() => {
                debug!(account_id, cursor = next, "following cursor");
            }
            _ => {
                debug!(account_id, pages = pages.len(), "no cursor on page, end of timeline");
                break;
            }
        }

        if page_number < config.max_pages {
            tokio::time::sleep(config.page_delay).await;
        }
    }

    pages
}
