//! Import records - the unit of ingestible content.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Source platform of an imported post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    Twitter,
    Farcaster,
}

impl Platform {
    /// Short tag stored alongside records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Twitter => "TW",
            Platform::Farcaster => "FC",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One post with its platform-scoped stable identifier.
///
/// Records are produced by the extractors and consumed exactly once by the
/// ingestion sink; they are never mutated after construction. The text may
/// be empty, the identifier never is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportRecord {
    /// Platform-scoped stable identifier
    pub external_id: String,

    /// Where the post came from
    pub platform: Platform,

    /// Post body
    pub text: String,
}

impl ImportRecord {
    /// Create a new record.
    pub fn new(
        external_id: impl Into<String>,
        platform: Platform,
        text: impl Into<String>,
    ) -> Self {
        Self {
            external_id: external_id.into(),
            platform,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_tags() {
        assert_eq!(Platform::Twitter.as_str(), "TW");
        assert_eq!(Platform::Farcaster.as_str(), "FC");
        assert_eq!(Platform::Farcaster.to_string(), "FC");
    }
}
