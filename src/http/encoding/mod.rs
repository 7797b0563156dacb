pub mod error;
pub mod reply;

use std::sync::Arc;

use warp::path::FullPath;
use warp::{Filter, Rejection};

use self::error::FlowRejection;

/// Matches requests whose whole path equals `path`, e.g. a configured `/oauth`.
pub fn exact_path(path: &str) -> impl Filter<Extract = (), Error = Rejection> + Clone {
    let path: Arc<str> = Arc::from(path);
    warp::path::full()
        .and_then(move |full: FullPath| {
            let path = Arc::clone(&path);
            async move {
                if full.as_str() == &*path {
                    Ok(())
                } else {
                    Err(warp::reject::not_found())
                }
            }
        })
        .untuple_one()
}

/// Query string decoded into `T`. A request without a query decodes like an empty one.
pub fn query<T>() -> impl Filter<Extract = (T,), Error = Rejection> + Clone
where
    T: serde::de::DeserializeOwned + Send + 'static,
{
    warp::query::raw()
        .or(warp::any().map(String::new))
        .unify()
        .and_then(|raw: String| async move {
            serde_urlencoded::from_str::<T>(&raw)
                .map_err(|e| warp::reject::custom(FlowRejection::BadQuery(e.to_string())))
        })
}
