//! Credential handling with secure memory.
//!
//! API keys pass through several layers on their way into request headers;
//! the `secrecy`-backed wrapper keeps them out of logs and debug output
//! along the way.

use std::fmt;

use secrecy::{ExposeSecret, SecretBox};

/// An API credential that never appears in Debug or Display output.
pub struct ApiKey(SecretBox<str>);

impl ApiKey {
    /// Wrap a raw key.
    pub fn new(value: impl Into<String>) -> Self {
        Self(SecretBox::new(value.into().into_boxed_str()))
    }

    /// Expose the raw key. Call only at the point of building a request.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl Clone for ApiKey {
    fn clone(&self) -> Self {
        Self::new(self.expose().to_string())
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl From<String> for ApiKey {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for ApiKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_redacted_in_debug_and_display() {
        let key = ApiKey::new("rapid-api-secret-123");
        assert_eq!(format!("{:?}", key), "[REDACTED]");
        assert_eq!(format!("{}", key), "[REDACTED]");
    }

    #[test]
    fn expose_returns_raw_key() {
        let key = ApiKey::from("bearer-token");
        assert_eq!(key.expose(), "bearer-token");
        assert_eq!(key.clone().expose(), "bearer-token");
    }
}
