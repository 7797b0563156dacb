use tracing::{event, Level};
use warp::http::StatusCode;
use warp::{Rejection, Reply};

use crate::flow::FlowError;
use crate::http::response::Page;
use crate::render::ErrorPage;

#[derive(Debug)]
pub enum FlowRejection {
    Flow(FlowError),
    BadQuery(String),
}

impl warp::reject::Reject for FlowRejection {}

impl From<FlowError> for FlowRejection {
    fn from(error: FlowError) -> Self {
        Self::Flow(error)
    }
}

impl FlowRejection {
    fn page(&self) -> (StatusCode, ErrorPage) {
        use FlowError::*;

        match self {
            Self::BadQuery(e) => (
                StatusCode::BAD_REQUEST,
                ErrorPage::new("Bad request", format!("The query string is invalid: {}", e)),
            ),
            Self::Flow(Denied { error, description }) => {
                let message = match description {
                    Some(d) => format!("The identity provider returned {}: {}", error, d),
                    None => format!("The identity provider returned {}.", error),
                };
                (
                    StatusCode::BAD_REQUEST,
                    ErrorPage::new("Sign-in was not completed", message),
                )
            }
            Self::Flow(MissingCode) => (
                StatusCode::BAD_REQUEST,
                ErrorPage::new(
                    "Missing authorization code",
                    "The callback was called without a code.",
                ),
            ),
            Self::Flow(MissingAccessToken) => (
                StatusCode::BAD_REQUEST,
                ErrorPage::new(
                    "Missing access token",
                    "Sign in first to see your data.",
                ),
            ),
            Self::Flow(NoAccessToken) => (
                StatusCode::BAD_GATEWAY,
                ErrorPage::new(
                    "Sign-in failed",
                    "The identity provider did not issue an access token.",
                ),
            ),
            Self::Flow(Exchange(e)) => (
                StatusCode::BAD_GATEWAY,
                ErrorPage::new("Sign-in failed", e.to_string()),
            ),
            Self::Flow(Render(e)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorPage::new("Internal error", e.to_string()),
            ),
        }
    }
}

pub async fn handle_reject(err: Rejection) -> Result<impl Reply, Rejection> {
    match err.find::<FlowRejection>() {
        Some(e) => {
            let (status, page) = e.page();
            event!(Level::WARN, %status, reason = ?e, "request rejected");
            Ok(Page::new(page, status))
        }
        None => Err(err),
    }
}
