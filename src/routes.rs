use std::convert::Infallible;
use std::sync::Arc;

use hyper::StatusCode;
use tracing::info;
use warp::{Filter, Reply};

use crate::handlers::{analyze, handle_rejection, read_body};
use crate::middleware::add_cors_headers;
use crate::models::AppState;

pub fn routes(
    state: Arc<AppState>,
) -> impl Filter<Extract = (impl Reply,), Error = Infallible> + Clone {
    let state_filter = warp::any().map(move || state.clone());

    let health_check = warp::path("health")
        .and(warp::path::end())
        .and(warp::get())
        .map(|| "OK");

    let preflight = warp::path!("api" / "analyze")
        .and(warp::options())
        .map(|| StatusCode::NO_CONTENT);

    let analyze_route = warp::path!("api" / "analyze")
        .and(warp::post())
        .and(warp::header::headers_cloned())
        .and(warp::body::stream().and_then(read_body))
        .and(state_filter)
        .and_then(analyze);

    let access_log = warp::log::custom(|info: warp::log::Info| {
        info!(
            method = %info.method(),
            path = info.path(),
            status = info.status().as_u16(),
            elapsed_ms = info.elapsed().as_millis() as u64,
            "request"
        );
    });

    health_check
        .or(preflight)
        .or(analyze_route)
        .recover(handle_rejection)
        .map(with_cors)
        .with(access_log)
}

fn with_cors(reply: impl Reply) -> warp::reply::Response {
    let mut response = reply.into_response();
    add_cors_headers(response.headers_mut());
    response
}
