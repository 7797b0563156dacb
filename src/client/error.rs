use thiserror::Error;

/// Why an outbound call to the provider or the resource API did not succeed.
#[derive(Debug, Error)]
pub enum Failure {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("upstream returned HTTP {status}")]
    Status { status: u16, body: String },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("token exchange failed: {0}")]
    ExchangeFailed(#[source] Failure),
    #[error("fetching {resource} failed: {reason}")]
    FetchFailed {
        resource: &'static str,
        #[source]
        reason: Failure,
    },
}

impl Error {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
