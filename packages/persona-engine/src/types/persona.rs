//! Persona registry rows.

use serde::{Deserialize, Serialize};

/// Import state of a persona's timeline.
///
/// The persisted wire codes (0 / 9) match the original registry table and
/// leave room for intermediate states that are deliberately never persisted:
/// a crash mid-import must read back as not imported so a retry starts
/// clean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImportStatus {
    NotImported,
    FullyImported,
}

impl ImportStatus {
    /// Wire code as stored in the registry.
    pub fn code(self) -> i32 {
        match self {
            ImportStatus::NotImported => 0,
            ImportStatus::FullyImported => 9,
        }
    }

    /// Parse a wire code back into a status.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(ImportStatus::NotImported),
            9 => Some(ImportStatus::FullyImported),
            _ => None,
        }
    }
}

/// A persona row: display identity plus per-platform account links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonaRecord {
    /// Display name, also the registry key
    pub name: String,

    /// Avatar image URL from the resolved profile
    pub avatar_url: String,

    /// System prompt establishing the persona's voice
    pub persona_prompt: String,

    /// Prefix for linking back to original posts
    pub post_url_prefix: String,

    /// Directory of this persona's content store
    pub store_path: String,

    /// Primary-platform account id
    pub twitter_id: String,

    /// Linked secondary-platform account id, set once discovered
    pub farcaster_id: Option<String>,

    /// Import state
    pub status: ImportStatus,
}

impl PersonaRecord {
    /// Create a fresh, not-yet-imported persona for a resolved account.
    pub fn new(name: impl Into<String>, twitter_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            avatar_url: String::new(),
            persona_prompt: String::new(),
            post_url_prefix: String::new(),
            store_path: String::new(),
            twitter_id: twitter_id.into(),
            farcaster_id: None,
            status: ImportStatus::NotImported,
        }
    }

    /// Set the avatar URL.
    pub fn with_avatar_url(mut self, url: impl Into<String>) -> Self {
        self.avatar_url = url.into();
        self
    }

    /// Set the persona system prompt.
    pub fn with_persona_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.persona_prompt = prompt.into();
        self
    }

    /// Set the post URL prefix.
    pub fn with_post_url_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.post_url_prefix = prefix.into();
        self
    }

    /// Set the content store path.
    pub fn with_store_path(mut self, path: impl Into<String>) -> Self {
        self.store_path = path.into();
        self
    }

    /// Whether this persona is ready to chat with.
    pub fn is_ready(&self) -> bool {
        self.status == ImportStatus::FullyImported
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_round_trip() {
        for status in [ImportStatus::NotImported, ImportStatus::FullyImported] {
            assert_eq!(ImportStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(ImportStatus::from_code(5), None);
    }

    #[test]
    fn new_persona_is_not_ready() {
        let persona = PersonaRecord::new("alice", "42");
        assert_eq!(persona.status, ImportStatus::NotImported);
        assert!(!persona.is_ready());
        assert!(persona.farcaster_id.is_none());
    }
}
