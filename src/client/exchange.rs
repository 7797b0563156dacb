use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use tracing::{event, Level};
use url::Url;

use crate::auth::{ClientCredentials, TokenRequest, TokenResponse};
use crate::core::config::Config;
use crate::core::types::{AuthCode, RedirectUri};

use super::{send, Decoded, Error, Result};

/// Trades an authorization code for tokens at the provider's token endpoint.
#[derive(Debug, Clone)]
pub struct ExchangeClient {
    http: reqwest::Client,
    token_url: Url,
    redirect_uri: RedirectUri,
    credentials: ClientCredentials,
}

impl ExchangeClient {
    pub fn new(config: &Config, http: reqwest::Client) -> Self {
        Self {
            http,
            token_url: config.token_url(),
            redirect_uri: config.callback_url(),
            credentials: config.provider.credentials.clone(),
        }
    }

    /// Form body sent for `code`.
    pub fn token_request<'a>(&'a self, code: &'a AuthCode) -> TokenRequest<'a> {
        TokenRequest::authorization_code(code, &self.redirect_uri)
    }

    /// Exchanges `code` exactly once. Non-2xx and transport errors are
    /// `ExchangeFailed`; an unparseable 2xx body is `Decoded::Malformed`.
    #[tracing::instrument(skip_all, fields(token_url = %self.token_url))]
    pub async fn exchange(&self, code: &AuthCode) -> Result<Decoded<TokenResponse>> {
        let form = self.token_request(code).to_form().map_err(|e| {
            Error::config(format!("cannot encode token request: {}", e))
        })?;

        let request = self
            .http
            .post(self.token_url.clone())
            .header(AUTHORIZATION, self.credentials.basic_authorization())
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .header(ACCEPT, "application/json")
            .body(form);

        let body = send(request).await.map_err(|e| {
            event!(Level::WARN, error = %e, "token exchange failed");
            Error::ExchangeFailed(e)
        })?;

        event!(Level::INFO, "token exchange succeeded");
        Ok(Decoded::from_body(&body))
    }
}
