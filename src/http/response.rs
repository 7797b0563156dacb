use askama::Template;
use tracing::{event, Level};
use warp::http::StatusCode;
use warp::reply::{Reply, Response};

use crate::flow::CallbackOutcome;
use crate::render::{DataPage, LoginPage};

/// A rendered HTML page with its status code.
pub struct Page<T> {
    template: T,
    status: StatusCode,
}

impl<T: Template> Page<T> {
    pub fn new(template: T, status: StatusCode) -> Self {
        Self { template, status }
    }

    pub fn ok(template: T) -> Self {
        Self::new(template, StatusCode::OK)
    }
}

impl<T: Template + Send> Reply for Page<T> {
    fn into_response(self) -> Response {
        match self.template.render() {
            Ok(body) => warp::reply::with_status(warp::reply::html(body), self.status)
                .into_response(),
            Err(e) => {
                event!(Level::ERROR, error = %e, "failed to render page");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

impl Reply for LoginPage {
    fn into_response(self) -> Response {
        Page::ok(self).into_response()
    }
}

impl Reply for DataPage {
    fn into_response(self) -> Response {
        Page::ok(self).into_response()
    }
}

impl Reply for CallbackOutcome {
    fn into_response(self) -> Response {
        match self {
            Self::Display(page) => page.into_response(),
            Self::Handoff(page) => Page::ok(page).into_response(),
        }
    }
}
