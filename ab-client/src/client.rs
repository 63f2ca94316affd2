//! Typed request client
//!
//! One logical operation is one HTTP round trip and one decoded envelope.
//! There is no retry and no backoff; every call is fire-once.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::{HeaderMap, HeaderValue, Method};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::{ApiErrorBody, ApiResponse};
use tokio::sync::RwLock;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::transport::{ApiRequest, NetworkTransport, RawResponse, Transport};
use crate::types::{Admin, Public, Surface};

/// Client for the admin dashboard
pub type AdminClient = ApiClient<Admin>;
/// Client for the public site
pub type PublicClient = ApiClient<Public>;

/// Request client parameterized by the surface it may reach.
///
/// Clones share the transport and the bearer token, so a store holding a
/// clone sees a login performed through another handle.
pub struct ApiClient<S: Surface = Admin> {
    transport: Arc<dyn Transport>,
    api_base: String,
    token: Arc<RwLock<Option<String>>>,
    _surface: PhantomData<S>,
}

impl<S: Surface> Clone for ApiClient<S> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            api_base: self.api_base.clone(),
            token: Arc::clone(&self.token),
            _surface: PhantomData,
        }
    }
}

impl<S: Surface> fmt::Debug for ApiClient<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("surface", &S::NAME)
            .field("api_base", &self.api_base)
            .finish_non_exhaustive()
    }
}

impl<S: Surface> ApiClient<S> {
    /// Create a client that talks to the network
    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        let transport = NetworkTransport::new(config)?;
        Ok(Self::with_transport(Arc::new(transport), config))
    }

    /// Create a client over any transport
    pub fn with_transport(transport: Arc<dyn Transport>, config: &ClientConfig) -> Self {
        Self {
            transport,
            api_base: config.api_base(),
            token: Arc::new(RwLock::new(config.token.clone())),
            _surface: PhantomData,
        }
    }

    /// `{base_url}{api_prefix}`
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Set or clear the bearer token
    pub async fn set_token(&self, token: Option<String>) {
        *self.token.write().await = token;
    }

    pub async fn clear_token(&self) {
        self.set_token(None).await;
    }

    /// Current bearer token
    pub async fn token(&self) -> Option<String> {
        self.token.read().await.clone()
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> ClientResult<ApiResponse<T>> {
        self.request::<T, ()>(Method::GET, endpoint, None).await
    }

    /// Make a POST request, with a JSON body when one is given
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: Option<&B>,
    ) -> ClientResult<ApiResponse<T>> {
        self.request(Method::POST, endpoint, body).await
    }

    /// Make a POST request without body
    pub async fn post_empty<T: DeserializeOwned>(
        &self,
        endpoint: &str,
    ) -> ClientResult<ApiResponse<T>> {
        self.request::<T, ()>(Method::POST, endpoint, None).await
    }

    pub(crate) async fn request<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
    ) -> ClientResult<ApiResponse<T>> {
        let url = format!("{}{}", self.api_base, endpoint);
        let headers = self.headers().await?;
        let body = body.map(serde_json::to_vec).transpose()?;

        tracing::debug!(surface = S::NAME, %method, %url, "API request");
        let response = self
            .transport
            .send(ApiRequest {
                method: method.clone(),
                url: url.clone(),
                headers,
                body,
            })
            .await?;

        if !response.status.is_success() {
            let err = Self::error_from(&response);
            tracing::warn!(
                surface = S::NAME,
                %method,
                %url,
                status = response.status.as_u16(),
                error = %err,
                "API request failed"
            );
            return Err(err);
        }

        Self::decode(response)
    }

    async fn headers(&self) -> ClientResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(token) = self.token.read().await.as_deref() {
            let value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| ClientError::Config("token contains invalid header characters".into()))?;
            headers.insert(AUTHORIZATION, value);
        }
        Ok(headers)
    }

    /// Map a non-2xx response to an error, preferring the server's message
    fn error_from(response: &RawResponse) -> ClientError {
        let parsed = serde_json::from_slice::<ApiErrorBody>(&response.body).ok();
        match parsed {
            Some(body) => match body.resolved_message() {
                Some(message) => ClientError::Api {
                    status: response.status.as_u16(),
                    message: message.to_string(),
                    code: body.code.clone(),
                    details: body.details.clone(),
                },
                None => ClientError::from_status(response.status),
            },
            None => ClientError::from_status(response.status),
        }
    }

    fn decode<T: DeserializeOwned>(response: RawResponse) -> ClientResult<ApiResponse<T>> {
        // 204 and friends: no envelope, the payload is `null`
        if response.body.iter().all(u8::is_ascii_whitespace) {
            let data = serde_json::from_value(serde_json::Value::Null).map_err(|e| {
                ClientError::InvalidResponse(format!("empty body for a typed payload: {e}"))
            })?;
            return Ok(ApiResponse::ok(data));
        }

        serde_json::from_slice(&response.body)
            .map_err(|e| ClientError::InvalidResponse(format!("JSON parse error: {e}")))
    }
}

impl ApiClient<Admin> {
    /// Make a PUT request
    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: Option<&B>,
    ) -> ClientResult<ApiResponse<T>> {
        self.request(Method::PUT, endpoint, body).await
    }

    /// Make a PATCH request
    pub async fn patch<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: Option<&B>,
    ) -> ClientResult<ApiResponse<T>> {
        self.request(Method::PATCH, endpoint, body).await
    }

    /// Make a DELETE request
    pub async fn delete<T: DeserializeOwned>(
        &self,
        endpoint: &str,
    ) -> ClientResult<ApiResponse<T>> {
        self.request::<T, ()>(Method::DELETE, endpoint, None).await
    }
}
