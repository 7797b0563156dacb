use tracing::{event, Level};

use crate::auth::{CallbackParams, DisplayParams};
use crate::client::{self, ExchangeClient, ResourceFetcher};
use crate::core::config::{Config, TokenHandoff};
use crate::core::types::AccessToken;
use crate::render::{DataPage, HandoffPage, LoginPage, Section};

pub mod error;

pub use error::FlowError;

/// What the callback produces once the code has been exchanged.
pub enum CallbackOutcome {
    Display(DataPage),
    Handoff(HandoffPage),
}

/// Login, callback and display, wired to the exchange client and the fetcher.
///
/// Holds no per-user state: each request carries everything it needs in its
/// query string, so one instance is shared by every request.
#[derive(Debug)]
pub struct SignInFlow {
    config: Config,
    exchange: ExchangeClient,
    resources: ResourceFetcher,
}

impl SignInFlow {
    pub fn new(config: Config) -> client::Result<Self> {
        let http = client::http_client(config.request_timeout)?;
        let exchange = ExchangeClient::new(&config, http.clone());
        let resources = ResourceFetcher::new(&config, http)?;

        Ok(Self {
            config,
            exchange,
            resources,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn login(&self) -> LoginPage {
        LoginPage {
            sign_in_url: self.config.sign_in_url().to_string(),
        }
    }

    #[tracing::instrument(skip_all)]
    pub async fn callback(&self, params: CallbackParams) -> Result<CallbackOutcome, FlowError> {
        if let Some(error) = params.error {
            event!(Level::INFO, %error, "provider returned an error to the callback");
            return Err(FlowError::Denied {
                error,
                description: params.error_description,
            });
        }

        let code = params
            .code
            .filter(|c| !c.0.is_empty())
            .ok_or(FlowError::MissingCode)?;

        let token = self.exchange.exchange(&code).await?.into_inner();
        let access_token = token.access_token().ok_or(FlowError::NoAccessToken)?;
        event!(
            Level::DEBUG,
            token_type = %token.token_type,
            expires_in = token.expires_in,
            "received tokens"
        );

        match self.config.handoff {
            TokenHandoff::Render => Ok(CallbackOutcome::Display(
                self.data_page(&access_token).await?,
            )),
            TokenHandoff::Redirect => Ok(CallbackOutcome::Handoff(HandoffPage {
                location: self.display_location(&access_token),
            })),
        }
    }

    #[tracing::instrument(skip_all)]
    pub async fn display(&self, params: DisplayParams) -> Result<DataPage, FlowError> {
        let access_token = params
            .access_token
            .filter(|t| !t.0.is_empty())
            .ok_or(FlowError::MissingAccessToken)?;

        self.data_page(&access_token).await
    }

    /// Display path carrying the token, for the redirect hand-off.
    pub fn display_location(&self, access_token: &AccessToken) -> String {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("access_token", access_token.as_ref())
            .finish();
        format!("{}?{}", self.config.display_path, query)
    }

    async fn data_page(&self, access_token: &AccessToken) -> Result<DataPage, FlowError> {
        let (identity, rotation) = tokio::join!(
            self.resources.identity(access_token),
            self.resources.rotation()
        );

        let sections = vec![
            Section::from_result("Account", identity)?,
            Section::from_result("Champion rotation", rotation)?,
        ];
        event!(Level::INFO, "rendered data page");
        Ok(DataPage { sections })
    }
}
