use reqwest::header::{HeaderName, ACCEPT, AUTHORIZATION};
use serde::de::DeserializeOwned;
use tracing::{event, Level};
use url::Url;

use crate::core::config::Config;
use crate::core::models::{IdentityRecord, RotationRecord};
use crate::core::types::{AccessToken, ServiceToken};

use super::{send, Decoded, Error, Result};

pub const IDENTITY: &str = "account data";
pub const ROTATION: &str = "champion rotation";

/// Which credential authenticates a resource request.
#[derive(Debug, Clone, Copy)]
pub enum Credential<'a> {
    /// The user's delegated token, sent as `Authorization: Bearer`.
    Bearer(&'a AccessToken),
    /// The application's static token, sent in the service header.
    Service(&'a ServiceToken),
}

/// Authenticated GETs against the downstream resource API. Nothing is cached.
#[derive(Debug, Clone)]
pub struct ResourceFetcher {
    http: reqwest::Client,
    service_header: HeaderName,
    service_token: ServiceToken,
    account_data: Url,
    champion_data: Url,
}

impl ResourceFetcher {
    pub fn new(config: &Config, http: reqwest::Client) -> Result<Self> {
        let service_header = HeaderName::from_bytes(config.api.token_header.as_bytes())
            .map_err(|e| {
                Error::config(format!(
                    "invalid service token header {:?}: {}",
                    config.api.token_header, e
                ))
            })?;

        Ok(Self {
            http,
            service_header,
            service_token: config.api.token.clone(),
            account_data: config.api.account_data.clone(),
            champion_data: config.api.champion_data.clone(),
        })
    }

    #[tracing::instrument(skip_all, fields(resource = resource, url = %url))]
    pub async fn fetch<R>(
        &self,
        resource: &'static str,
        url: &Url,
        credential: Credential<'_>,
    ) -> Result<Decoded<R>>
    where
        R: DeserializeOwned + Default,
    {
        let request = self
            .http
            .get(url.clone())
            .header(ACCEPT, "application/json");
        let request = match credential {
            Credential::Bearer(token) => {
                request.header(AUTHORIZATION, format!("Bearer {}", token.as_ref()))
            }
            Credential::Service(token) => {
                request.header(self.service_header.clone(), token.as_ref())
            }
        };

        let body = send(request).await.map_err(|reason| {
            event!(Level::WARN, error = %reason, "resource request failed");
            Error::FetchFailed { resource, reason }
        })?;

        event!(Level::DEBUG, "resource request succeeded");
        Ok(Decoded::from_body(&body))
    }

    /// Identity of the signed-in user, in delegated mode.
    pub async fn identity(&self, token: &AccessToken) -> Result<Decoded<IdentityRecord>> {
        self.fetch(IDENTITY, &self.account_data, Credential::Bearer(token))
            .await
    }

    /// Current champion rotation, in service mode.
    pub async fn rotation(&self) -> Result<Decoded<RotationRecord>> {
        self.fetch(
            ROTATION,
            &self.champion_data,
            Credential::Service(&self.service_token),
        )
        .await
    }
}
