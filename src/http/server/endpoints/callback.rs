use std::sync::Arc;

use warp::Filter;

use crate::auth::CallbackParams;
use crate::flow::SignInFlow;
use crate::http::encoding::{self, reply};

pub fn callback_endpoint(
    flow: Arc<SignInFlow>,
) -> impl warp::Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    let path = flow.config().provider.callback_path.clone();
    let with_flow = warp::any().map(move || flow.clone());

    encoding::exact_path(&path)
        .and(warp::get())
        .and(with_flow)
        .and(encoding::query::<CallbackParams>())
        .and_then(|flow: Arc<SignInFlow>, params| async move {
            reply::reply(flow.callback(params).await)
        })
}
