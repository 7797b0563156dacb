use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::core::types::{AccessToken, AuthCode, ClientId, ClientSecret, GrantType, RedirectUri};

pub mod access_token;

pub use access_token::*;

#[derive(Debug, Clone)]
pub struct ClientCredentials {
    pub client_id: ClientId,
    pub client_secret: ClientSecret,
}

impl ClientCredentials {
    /// `Authorization` header value for HTTP Basic client authentication.
    pub fn basic_authorization(&self) -> String {
        let raw = format!("{}:{}", self.client_id.as_ref(), self.client_secret.as_ref());
        format!("Basic {}", STANDARD.encode(raw.as_bytes()))
    }
}

/// Form body of the authorization code grant. Field order is the wire order.
#[derive(Debug, serde::Serialize)]
pub struct TokenRequest<'a> {
    pub grant_type: GrantType,
    pub code: &'a AuthCode,
    pub redirect_uri: &'a RedirectUri,
}

impl<'a> TokenRequest<'a> {
    pub fn authorization_code(code: &'a AuthCode, redirect_uri: &'a RedirectUri) -> Self {
        Self {
            grant_type: GrantType::AuthorizationCode,
            code,
            redirect_uri,
        }
    }

    pub fn to_form(&self) -> Result<String, serde_urlencoded::ser::Error> {
        serde_urlencoded::to_string(self)
    }
}

/// Query string the identity provider sends the browser back with.
#[derive(Debug, Default, serde::Deserialize)]
pub struct CallbackParams {
    pub code: Option<AuthCode>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

#[derive(Debug, Default, serde::Deserialize)]
pub struct DisplayParams {
    pub access_token: Option<AccessToken>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_authorization_encodes_id_and_secret() {
        let credentials = ClientCredentials {
            client_id: ClientId("client_id".to_string()),
            client_secret: ClientSecret("client_secret".to_string()),
        };
        assert_eq!(
            credentials.basic_authorization(),
            "Basic Y2xpZW50X2lkOmNsaWVudF9zZWNyZXQ="
        );
    }

    #[test]
    fn token_request_form_is_byte_exact() {
        let code = AuthCode("forged-code".to_string());
        let redirect_uri = RedirectUri("http://local.example.com:8080/oauth".to_string());
        let form = TokenRequest::authorization_code(&code, &redirect_uri)
            .to_form()
            .unwrap();
        assert_eq!(
            form,
            "grant_type=authorization_code&code=forged-code\
             &redirect_uri=http%3A%2F%2Flocal.example.com%3A8080%2Foauth"
        );
    }

    #[test]
    fn callback_params_tolerate_missing_fields() {
        let params: CallbackParams = serde_urlencoded::from_str("").unwrap();
        assert!(params.code.is_none());

        let params: CallbackParams =
            serde_urlencoded::from_str("error=access_denied&error_description=nope").unwrap();
        assert_eq!(params.error.as_deref(), Some("access_denied"));
        assert_eq!(params.error_description.as_deref(), Some("nope"));
    }
}
