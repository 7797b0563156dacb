use std::sync::Arc;

use warp::Filter;

use crate::flow::SignInFlow;

pub fn login_endpoint(
    flow: Arc<SignInFlow>,
) -> impl warp::Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    warp::path::end()
        .and(warp::get())
        .map(move || flow.login())
}
