//! Response types for the Firefly API.

use serde::Deserialize;
use serde_json::Value;

/// Envelope of `/v2/wallet/profileinfo`.
#[derive(Debug, Deserialize)]
pub(crate) struct ProfileInfoEnvelope {
    data: Option<ProfileInfoData>,
}

#[derive(Debug, Deserialize)]
struct ProfileInfoData {
    #[serde(rename = "farcasterProfiles", default)]
    farcaster_profiles: Vec<FarcasterProfile>,
}

#[derive(Debug, Deserialize)]
struct FarcasterProfile {
    fid: Option<Value>,
}

impl ProfileInfoEnvelope {
    /// First usable fid among the linked profiles. Fids arrive as numbers or
    /// strings depending on the profile's age.
    pub(crate) fn first_fid(self) -> Option<String> {
        self.data?
            .farcaster_profiles
            .into_iter()
            .find_map(|profile| match profile.fid {
                Some(Value::String(s)) => Some(s),
                Some(Value::Number(n)) => Some(n.to_string()),
                _ => None,
            })
    }
}
