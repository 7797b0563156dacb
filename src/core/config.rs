use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::auth::ClientCredentials;
use crate::core::types::{RedirectUri, Scope, ServiceToken};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tls {
    pub cert: PathBuf,
    pub key: PathBuf,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub tls: Option<Tls>,
}

/// Identity provider (RSO) client registration.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub base_url: Url,
    /// `host[:port]` the provider redirects the browser back to.
    pub callback_host: String,
    pub callback_path: String,
    pub credentials: ClientCredentials,
    pub response_type: String,
    pub scope: Scope,
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub token: ServiceToken,
    pub token_header: String,
    pub account_data: Url,
    pub champion_data: Url,
}

/// How the callback hands the freshly issued access token to the display page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum TokenHandoff {
    /// Render the display page directly from the callback.
    Render,
    /// Client-side redirect to the display path with `access_token` in the query.
    Redirect,
}

/// Validated application configuration. Built once at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub provider: ProviderConfig,
    pub api: ApiConfig,
    pub display_path: String,
    pub handoff: TokenHandoff,
    pub request_timeout: Duration,
}

impl Config {
    pub fn callback_url(&self) -> RedirectUri {
        let scheme = match self.server.tls {
            Some(_) => "https",
            None => "http",
        };
        RedirectUri(format!(
            "{}://{}{}",
            scheme, self.provider.callback_host, self.provider.callback_path
        ))
    }

    pub fn token_url(&self) -> Url {
        provider_endpoint(&self.provider.base_url, "token")
    }

    pub fn authorize_url(&self) -> Url {
        provider_endpoint(&self.provider.base_url, "authorize")
    }

    /// Authorize URL the login page links to.
    pub fn sign_in_url(&self) -> Url {
        let mut url = self.authorize_url();
        url.query_pairs_mut()
            .append_pair("redirect_uri", self.callback_url().as_ref())
            .append_pair("client_id", self.provider.credentials.client_id.as_ref())
            .append_pair("response_type", &self.provider.response_type)
            .append_pair("scope", &self.provider.scope.as_joined());
        url
    }
}

fn provider_endpoint(base: &Url, endpoint: &str) -> Url {
    let mut url = base.clone();
    url.set_query(None);
    url.set_fragment(None);
    let path = format!("{}/{}", base.path().trim_end_matches('/'), endpoint);
    url.set_path(&path);
    url
}
