//! Configuration for fetch and import runs.

use std::time::Duration;

/// Paging configuration for one timeline walk.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Hard page budget for one walk
    pub max_pages: usize,

    /// Posts requested per page
    pub page_size: u32,

    /// Fixed delay between consecutive page requests. The upstream APIs are
    /// rate limited; this is a flat courtesy pause, not a retry backoff.
    pub page_delay: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            max_pages: 50,
            page_size: 20,
            page_delay: Duration::from_secs(1),
        }
    }
}

impl FetchConfig {
    /// Set the page budget.
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Set the per-page post count.
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the inter-page delay.
    pub fn with_page_delay(mut self, page_delay: Duration) -> Self {
        self.page_delay = page_delay;
        self
    }
}

/// Configuration for a full cross-platform import run.
#[derive(Debug, Clone)]
pub struct ImportConfig {
    /// Paging for both platform walks
    pub fetch: FetchConfig,

    /// Directory under which per-persona stores live
    pub store_root: String,
}

impl ImportConfig {
    /// Create a config with default paging.
    pub fn new(store_root: impl Into<String>) -> Self {
        Self {
            fetch: FetchConfig::default(),
            store_root: store_root.into(),
        }
    }

    /// Set the paging configuration.
    pub fn with_fetch(mut self, fetch: FetchConfig) -> Self {
        self.fetch = fetch;
        self
    }

    /// Content store path for one persona.
    pub fn store_path_for(&self, name: &str) -> String {
        format!("{}/{}", self.store_root.trim_end_matches('/'), name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_paths_are_per_persona() {
        let config = ImportConfig::new("/tmp/stores/");
        assert_eq!(config.store_path_for("alice"), "/tmp/stores/alice");
        assert_eq!(config.store_path_for("bob"), "/tmp/stores/bob");
    }

    #[test]
    fn fetch_defaults() {
        let fetch = FetchConfig::default();
        assert_eq!(fetch.max_pages, 50);
        assert_eq!(fetch.page_size, 20);
        assert_eq!(fetch.page_delay, Duration::from_secs(1));
    }
}
