use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Serialize, Serializer};

use super::view::ViewMode;

/// Launch parameters carried in a URL fragment. A field is only set when its
/// key appeared and the value validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HashParams {
    #[serde(rename = "profileURL", skip_serializing_if = "Option::is_none")]
    pub profile_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "localProfilePath", skip_serializing_if = "Option::is_none")]
    pub local_profile_path: Option<String>,
    #[serde(rename = "view", skip_serializing_if = "Option::is_none")]
    pub view_mode: Option<ViewMode>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_payload"
    )]
    pub b64data: Option<Vec<u8>>,
    #[serde(rename = "customFilename", skip_serializing_if = "Option::is_none")]
    pub custom_filename: Option<String>,
}

impl HashParams {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn serialize_payload<S: Serializer>(
    payload: &Option<Vec<u8>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match payload {
        Some(bytes) => serializer.serialize_str(&STANDARD.encode(bytes)),
        None => serializer.serialize_none(),
    }
}
