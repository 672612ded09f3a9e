//! Response types for the twitter241 API.

use serde::Deserialize;

/// A resolved Twitter user.
#[derive(Debug, Clone)]
pub struct UserProfile {
    /// Stable account id (`rest_id`)
    pub rest_id: String,

    /// Profile bio
    pub description: String,

    /// HTTPS avatar URL
    pub profile_image_url: String,
}

/// Envelope of the `/user` endpoint: the profile sits four levels down at
/// `result.data.user.result`, with every level absent when the account does
/// not exist.
#[derive(Debug, Deserialize)]
pub(crate) struct UserEnvelope {
    result: Option<UserResult>,
}

#[derive(Debug, Deserialize)]
struct UserResult {
    data: Option<UserData>,
}

#[derive(Debug, Deserialize)]
struct UserData {
    user: Option<UserWrapper>,
}

#[derive(Debug, Deserialize)]
struct UserWrapper {
    result: Option<UserNode>,
}

#[derive(Debug, Deserialize)]
struct UserNode {
    rest_id: Option<String>,
    legacy: Option<UserLegacy>,
}

#[derive(Debug, Default, Deserialize)]
struct UserLegacy {
    description: Option<String>,
    profile_image_url_https: Option<String>,
}

impl UserEnvelope {
    pub(crate) fn into_profile(self) -> Option<UserProfile> {
        let node = self.result?.data?.user?.result?;
        let rest_id = node.rest_id?;
        let legacy = node.legacy.unwrap_or_default();

        Some(UserProfile {
            rest_id,
            description: legacy.description.unwrap_or_default(),
            profile_image_url: legacy.profile_image_url_https.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_envelope_parses() {
        let json = r#"{
            "result": { "data": { "user": { "result": {
                "rest_id": "25073877",
                "legacy": {
                    "description": "45th President",
                    "profile_image_url_https": "https://pbs.twimg.com/x.jpg",
                    "followers_count": 1
                }
            }}}}
        }"#;

        let envelope: UserEnvelope = serde_json::from_str(json).unwrap();
        let profile = envelope.into_profile().unwrap();

        assert_eq!(profile.rest_id, "25073877");
        assert_eq!(profile.description, "45th President");
        assert_eq!(profile.profile_image_url, "https://pbs.twimg.com/x.jpg");
    }

    #[test]
    fn missing_user_yields_none() {
        let envelope: UserEnvelope = serde_json::from_str(r#"{"result": {"data": {}}}"#).unwrap();
        assert!(envelope.into_profile().is_none());

        let envelope: UserEnvelope = serde_json::from_str("{}").unwrap();
        assert!(envelope.into_profile().is_none());
    }

    #[test]
    fn missing_legacy_fields_default_to_empty() {
        let json = r#"{"result": {"data": {"user": {"result": {"rest_id": "1"}}}}}"#;
        let envelope: UserEnvelope = serde_json::from_str(json).unwrap();
        let profile = envelope.into_profile().unwrap();

        assert_eq!(profile.rest_id, "1");
        assert!(profile.description.is_empty());
        assert!(profile.profile_image_url.is_empty());
    }
}
