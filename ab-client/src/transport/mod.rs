//! Transports - one HTTP round trip each.
//!
//! `ApiClient` builds the request and interprets the response; a transport
//! only moves bytes. Keeping the trait object-safe lets stores and tests
//! swap the network for an in-process router or a scripted fake.

mod network;
#[cfg(feature = "in-process")]
mod oneshot;

pub use network::NetworkTransport;
#[cfg(feature = "in-process")]
pub use oneshot::OneshotTransport;

use async_trait::async_trait;
use http::{HeaderMap, Method, StatusCode};

use crate::error::ClientResult;

/// A fully built request
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    /// Absolute URL (`{api_base}{endpoint}`)
    pub url: String,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

/// Status and raw body of a response
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Transport trait
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform exactly one round trip. Non-2xx statuses are not errors here.
    async fn send(&self, request: ApiRequest) -> ClientResult<RawResponse>;
}
