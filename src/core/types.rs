use std::fmt;

#[derive(Debug, Clone, Copy, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GrantType {
    AuthorizationCode,
}

/// Ordered set of scope tokens, space-delimited on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope(Vec<String>);

impl Scope {
    pub fn from_delimited_parts(parts: &str) -> Self {
        let mut scope = Self(Vec::new());
        for part in parts.split_whitespace() {
            if !scope.0.iter().any(|s| s == part) {
                scope.0.push(part.to_string());
            }
        }
        scope
    }

    pub fn as_joined(&self) -> String {
        self.0.join(" ")
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientId(pub String);

impl AsRef<str> for ClientId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Clone)]
pub struct ClientSecret(pub String);

impl AsRef<str> for ClientSecret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ClientSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ClientSecret(..)")
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct RedirectUri(pub String);

impl AsRef<str> for RedirectUri {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Single-use code handed back by the identity provider on the callback.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct AuthCode(pub String);

impl AsRef<str> for AuthCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(transparent)]
pub struct AccessToken(pub String);

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(..)")
    }
}

/// Static credential identifying this application to the resource API.
#[derive(Clone, PartialEq, Eq)]
pub struct ServiceToken(pub String);

impl AsRef<str> for ServiceToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ServiceToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ServiceToken(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_keeps_order_and_drops_duplicates() {
        let scope = Scope::from_delimited_parts("openid  cpid openid offline_access");
        assert_eq!(scope.as_joined(), "openid cpid offline_access");
    }

    #[test]
    fn blank_scope_is_empty() {
        assert!(Scope::from_delimited_parts("   ").is_empty());
    }

    #[test]
    fn secrets_are_redacted_in_debug_output() {
        let secret = ClientSecret("hunter2".to_string());
        let token = AccessToken("abc".to_string());
        assert!(!format!("{:?}", secret).contains("hunter2"));
        assert!(!format!("{:?}", token).contains("abc"));
    }
}
