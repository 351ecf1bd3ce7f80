use std::convert::Infallible;
use std::sync::Arc;

use bytes::{Buf, BufMut, Bytes, BytesMut};
use futures::{Stream, StreamExt};
use hyper::{HeaderMap, StatusCode};
use tracing::{error, warn};
use url::Url;
use warp::{Rejection, Reply};

use crate::config::MAX_BODY_BYTES;
use crate::errors::AnalyzerError;
use crate::middleware::client_key;
use crate::models::{AnalysisPayload, AnalyzeRequest, AppState, ErrorBody};


// Order matters: rate limit, credential, body, provider.
pub async fn analyze(
    headers: HeaderMap,
    body: Bytes,
    state: Arc<AppState>,
) -> Result<impl Reply, Rejection> {
    let client = client_key(&headers);
    if !state.gate.admit(&client).await {
        return Err(warp::reject::custom(AnalyzerError::RateLimitExceeded));
    }

    let api_key = state.credentials.resolve().map_err(warp::reject::custom)?;
    let url = parse_target(&body).map_err(warp::reject::custom)?;

    let analysis = state
        .analyzer
        .analyze(&api_key, &url)
        .await
        .map_err(warp::reject::custom)?;

    Ok(warp::reply::json(&AnalysisPayload::from(analysis)))
}

/// Buffers the request body up to [`MAX_BODY_BYTES`]. Works with or without
/// a `Content-Length` header.
pub async fn read_body<S, B>(body: S) -> Result<Bytes, Rejection>
where
    S: Stream<Item = Result<B, warp::Error>>,
    B: Buf,
{
    collect_body(body, MAX_BODY_BYTES)
        .await
        .map_err(warp::reject::custom)
}

pub async fn collect_body<S, B, E>(body: S, limit: u64) -> Result<Bytes, AnalyzerError>
where
    S: Stream<Item = Result<B, E>>,
    B: Buf,
    E: std::fmt::Display,
{
    futures::pin_mut!(body);
    let mut buf = BytesMut::new();
    while let Some(chunk) = body.next().await {
        let chunk = chunk.map_err(|e| AnalyzerError::InvalidBody(e.to_string()))?;
        if (buf.len() + chunk.remaining()) as u64 > limit {
            return Err(AnalyzerError::PayloadTooLarge);
        }
        buf.put(chunk);
    }
    Ok(buf.freeze())
}

pub fn parse_target(body: &[u8]) -> Result<String, AnalyzerError> {
    let request: AnalyzeRequest =
        serde_json::from_slice(body).map_err(|e| AnalyzerError::InvalidBody(e.to_string()))?;

    let url = match request.url {
        None | Some(serde_json::Value::Null) => return Err(AnalyzerError::MissingUrl),
        Some(serde_json::Value::String(s)) if s.is_empty() => return Err(AnalyzerError::MissingUrl),
        Some(serde_json::Value::String(s)) => s,
        Some(_) => return Err(AnalyzerError::InvalidUrl),
    };

    Url::parse(&url).map_err(|_| AnalyzerError::InvalidUrl)?;
    Ok(url)
}

pub async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let (code, message) = if err.is_not_found() {
        (StatusCode::NOT_FOUND, "Not Found".to_string())
    } else if let Some(e) = err.find::<AnalyzerError>() {
        if e.is_client_error() {
            warn!(status = %e.status(), error = %e, "request rejected");
        } else {
            error!(status = %e.status(), error = %e, "analysis failed");
        }
        (e.status(), e.public_message())
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed".to_string())
    } else {
        error!(rejection = ?err, "unhandled rejection");
        (StatusCode::INTERNAL_SERVER_ERROR, "An unexpected error occurred".to_string())
    };

    Ok(warp::reply::with_status(
        warp::reply::json(&ErrorBody { error: message }),
        code,
    ))
}
