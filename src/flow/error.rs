use crate::client;

/// Why a front-controller request could not produce its page.
#[derive(Debug)]
pub enum FlowError {
    /// The provider sent the user back with an `error` instead of a code.
    Denied {
        error: String,
        description: Option<String>,
    },
    MissingCode,
    MissingAccessToken,
    /// The token endpoint answered 2xx but issued no access token.
    NoAccessToken,
    Exchange(client::Error),
    Render(askama::Error),
}

impl From<client::Error> for FlowError {
    fn from(e: client::Error) -> Self {
        Self::Exchange(e)
    }
}

impl From<askama::Error> for FlowError {
    fn from(e: askama::Error) -> Self {
        Self::Render(e)
    }
}
