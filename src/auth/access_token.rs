use crate::core::types::AccessToken;
use crate::util::de::or_default;

/// Token endpoint response. A field that is absent, `null` or of the wrong
/// type falls back to its empty value without affecting the others.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct TokenResponse {
    #[serde(deserialize_with = "or_default")]
    pub access_token: String,
    #[serde(deserialize_with = "or_default")]
    pub refresh_token: String,
    #[serde(deserialize_with = "or_default")]
    pub scope: String,
    #[serde(deserialize_with = "or_default")]
    pub id_token: String,
    #[serde(deserialize_with = "or_default")]
    pub token_type: String,
    #[serde(deserialize_with = "or_default")]
    pub expires_in: u64,
}

impl TokenResponse {
    /// The delegated credential, if the provider issued one.
    pub fn access_token(&self) -> Option<AccessToken> {
        if self.access_token.is_empty() {
            None
        } else {
            Some(AccessToken(self.access_token.clone()))
        }
    }
}
