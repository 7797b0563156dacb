use warp::reply::{Reply, Response};
use warp::Rejection;

use super::error::FlowRejection;

pub fn accept<T, E>(result: Result<T, E>) -> Result<T, Rejection>
where
    E: Into<FlowRejection>,
{
    result.map_err(|e| warp::reject::custom(e.into()))
}

pub fn reply<T, E>(result: Result<T, E>) -> Result<Response, Rejection>
where
    T: Reply,
    E: Into<FlowRejection>,
{
    accept(result).map(|t| t.into_response())
}
