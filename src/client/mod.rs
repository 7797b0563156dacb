use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::{event, Level};

pub mod error;
pub mod exchange;
pub mod resource;

pub use error::{Error, Failure, Result};
pub use exchange::ExchangeClient;
pub use resource::{Credential, ResourceFetcher};

/// Outcome of decoding a successful response body.
///
/// Fields that are absent, `null` or of the wrong type take their defaults and
/// the body still counts as `Parsed`. A body that is not a JSON object at all
/// yields `Malformed` carrying `T::default()`, so callers keep going with an
/// empty record while still being able to tell the two cases apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded<T> {
    Parsed(T),
    Malformed { value: T, reason: String },
}

impl<T> Decoded<T> {
    pub fn into_inner(self) -> T {
        match self {
            Self::Parsed(value) | Self::Malformed { value, .. } => value,
        }
    }
}

impl<T: DeserializeOwned + Default> Decoded<T> {
    pub fn from_body(body: &str) -> Self {
        match serde_json::from_str(body) {
            Ok(value) => Self::Parsed(value),
            Err(e) => {
                event!(Level::WARN, error = %e, "response body did not decode, using empty record");
                Self::Malformed {
                    value: T::default(),
                    reason: e.to_string(),
                }
            }
        }
    }
}

/// Shared HTTP client for all outbound calls. Cloning shares the connection pool.
pub fn http_client(timeout: Duration) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .map_err(|e| Error::config(format!("cannot build HTTP client: {}", e)))
}

/// Sends `request` and returns the body of a 2xx response.
async fn send(request: reqwest::RequestBuilder) -> std::result::Result<String, Failure> {
    let response = request.send().await?;
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(Failure::Status {
            status: status.as_u16(),
            body,
        });
    }
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::TokenResponse;

    #[test]
    fn malformed_body_is_distinguishable_from_partial_body() {
        let partial = Decoded::<TokenResponse>::from_body(r#"{"access_token":"T"}"#);
        assert!(matches!(partial, Decoded::Parsed(_)));
        assert_eq!(partial.into_inner().access_token, "T");

        let malformed = Decoded::<TokenResponse>::from_body("<html>oops</html>");
        assert!(matches!(malformed, Decoded::Malformed { .. }));
        assert_eq!(malformed.into_inner(), TokenResponse::default());
    }

    #[test]
    fn wrong_field_type_only_resets_that_field() {
        let decoded =
            Decoded::<TokenResponse>::from_body(r#"{"access_token":"T","expires_in":"soon"}"#);
        assert!(matches!(decoded, Decoded::Parsed(_)));
        let token = decoded.into_inner();
        assert_eq!(token.access_token, "T");
        assert_eq!(token.expires_in, 0);
    }

    #[test]
    fn non_object_body_is_malformed() {
        assert!(matches!(
            Decoded::<TokenResponse>::from_body(r#"["T"]"#),
            Decoded::Malformed { .. }
        ));
    }
}
