//! Oneshot transport - in-process calls into an axum Router
//!
//! Requires the "in-process" feature.

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{Request, Uri};
use tower::ServiceExt;

use super::{ApiRequest, RawResponse, Transport};
use crate::error::{ClientError, ClientResult};

/// Oneshot transport (in-memory dispatch)
///
/// Calls the Router through Tower's `oneshot`, so a server and client in
/// the same process talk without a socket. Only the path and query reach
/// the router; scheme and authority are dropped.
///
/// # Example
///
/// ```ignore
/// use std::sync::Arc;
/// use ab_client::{AdminClient, ClientConfig, OneshotTransport};
///
/// let router = build_app().with_state(state);
/// let client = AdminClient::with_transport(
///     Arc::new(OneshotTransport::new(router)),
///     &ClientConfig::default(),
/// );
/// ```
#[derive(Debug, Clone)]
pub struct OneshotTransport {
    router: Router,
}

impl OneshotTransport {
    /// Create from an initialized Router (`with_state` already applied)
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    fn local_target(url: &str) -> ClientResult<String> {
        let uri: Uri = url
            .parse()
            .map_err(|e| ClientError::Transport(format!("Invalid URL {url}: {e}")))?;
        Ok(uri
            .path_and_query()
            .map(|pq| pq.as_str().to_string())
            .unwrap_or_else(|| "/".to_string()))
    }
}

#[async_trait]
impl Transport for OneshotTransport {
    async fn send(&self, request: ApiRequest) -> ClientResult<RawResponse> {
        let target = Self::local_target(&request.url)?;

        let mut builder = Request::builder().method(request.method).uri(target);
        if let Some(headers) = builder.headers_mut() {
            headers.extend(request.headers);
        }
        let body = request.body.map(Body::from).unwrap_or_else(Body::empty);
        let http_request = builder
            .body(body)
            .map_err(|e| ClientError::Transport(format!("Failed to build request: {e}")))?;

        let response = self
            .router
            .clone()
            .oneshot(http_request)
            .await
            .map_err(|e| ClientError::Transport(format!("Oneshot call failed: {e}")))?;

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .map_err(|e| ClientError::Transport(format!("Failed to read body: {e}")))?;

        Ok(RawResponse::new(status, body.to_vec()))
    }
}
