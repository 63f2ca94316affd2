// ab-client/tests/common/mod.rs
// In-process fake backend and a scripted transport shared by the integration tests

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use ab_client::models::{CircleMember, CircleMemberCreate, CircleMemberUpdate, User};
use ab_client::{AdminClient, ApiClient, ApiRequest, ClientConfig, ClientError, ClientResult};
use ab_client::{OneshotTransport, PublicClient, RawResponse, Transport};
use async_trait::async_trait;
use axum::extract::{Path, Request, State};
use axum::http::{HeaderMap, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use shared::client::{LoginRequest, LoginResponse, TokenRefresh};
use shared::{ApiErrorBody, ApiResponse};
use tokio::sync::oneshot;

pub const PASSWORD: &str = "secret";

pub fn member(id: i64, username: &str) -> CircleMember {
    CircleMember {
        id,
        username: username.to_string(),
        display_name: username.to_uppercase(),
        email: format!("{username}@example.com"),
        bio: None,
        avatar_url: None,
        is_active: true,
        created_at: "2024-05-01T09:00:00".to_string(),
        updated_at: "2024-05-01T09:00:00".to_string(),
        role_name: "MEMBER".to_string(),
        role_description: None,
    }
}

pub fn user(username: &str) -> User {
    User {
        id: format!("u-{username}"),
        username: username.to_string(),
        email: format!("{username}@example.com"),
        first_name: None,
        last_name: None,
        is_active: true,
        is_email_verified: true,
        roles: Vec::new(),
        created_at: "2024-01-01T00:00:00Z".to_string(),
        updated_at: "2024-01-01T00:00:00Z".to_string(),
        last_login_at: None,
    }
}

#[derive(Debug, Default)]
struct Inner {
    members: Vec<CircleMember>,
    next_id: i64,
    fail_reads: bool,
    fail_logout: bool,
    requests: Vec<String>,
}

/// In-memory stand-in for the backend's REST resources
#[derive(Debug, Clone, Default)]
pub struct Backend {
    inner: Arc<Mutex<Inner>>,
}

impl Backend {
    pub fn with_members(members: Vec<CircleMember>) -> Self {
        let next_id = members.iter().map(|m| m.id).max().unwrap_or(0) + 1;
        Self {
            inner: Arc::new(Mutex::new(Inner {
                members,
                next_id,
                ..Default::default()
            })),
        }
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.inner.lock().unwrap().fail_reads = fail;
    }

    pub fn set_fail_logout(&self, fail: bool) {
        self.inner.lock().unwrap().fail_logout = fail;
    }

    /// "METHOD /path?query" for every request seen so far
    pub fn requests(&self) -> Vec<String> {
        self.inner.lock().unwrap().requests.clone()
    }

    pub fn members(&self) -> Vec<CircleMember> {
        self.inner.lock().unwrap().members.clone()
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/api/v1/circle-members", get(list_members).post(create_member))
            .route("/api/v1/circle-members/active", get(active_members))
            .route(
                "/api/v1/circle-members/username/{username}",
                get(member_by_username),
            )
            .route(
                "/api/v1/circle-members/{id}",
                get(get_member).put(update_member).delete(delete_member),
            )
            .route("/api/v1/auth/login", post(login))
            .route("/api/v1/auth/logout", post(logout))
            .route("/api/v1/auth/me", get(me))
            .route("/api/v1/auth/refresh", post(refresh))
            .layer(middleware::from_fn_with_state(self.clone(), record))
            .with_state(self.clone())
    }

    pub fn admin_client(&self) -> AdminClient {
        ApiClient::with_transport(
            Arc::new(OneshotTransport::new(self.router())),
            &ClientConfig::default(),
        )
    }
}

async fn record(State(backend): State<Backend>, request: Request, next: Next) -> Response {
    let line = format!(
        "{} {}",
        request.method(),
        request
            .uri()
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or("/")
    );
    backend.inner.lock().unwrap().requests.push(line);
    next.run(request).await
}

fn error(status: StatusCode, message: &str) -> Response {
    (status, Json(ApiErrorBody::new(message))).into_response()
}

fn read_failure() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, "database unavailable").into_response()
}

async fn list_members(State(backend): State<Backend>) -> Response {
    let inner = backend.inner.lock().unwrap();
    if inner.fail_reads {
        return read_failure();
    }
    Json(ApiResponse::ok(inner.members.clone())).into_response()
}

async fn active_members(State(backend): State<Backend>) -> Response {
    let inner = backend.inner.lock().unwrap();
    if inner.fail_reads {
        return read_failure();
    }
    let active: Vec<_> = inner.members.iter().filter(|m| m.is_active).cloned().collect();
    Json(ApiResponse::ok(active)).into_response()
}

async fn get_member(State(backend): State<Backend>, Path(id): Path<i64>) -> Response {
    let inner = backend.inner.lock().unwrap();
    match inner.members.iter().find(|m| m.id == id) {
        Some(m) => Json(ApiResponse::ok(m.clone())).into_response(),
        None => error(StatusCode::NOT_FOUND, &format!("Circle member not found: {id}")),
    }
}

async fn member_by_username(
    State(backend): State<Backend>,
    Path(username): Path<String>,
) -> Response {
    let inner = backend.inner.lock().unwrap();
    match inner.members.iter().find(|m| m.username == username) {
        Some(m) => Json(ApiResponse::ok(m.clone())).into_response(),
        None => error(StatusCode::NOT_FOUND, &format!("Circle member not found: {username}")),
    }
}

async fn create_member(
    State(backend): State<Backend>,
    Json(create): Json<CircleMemberCreate>,
) -> Response {
    let mut inner = backend.inner.lock().unwrap();
    if inner.members.iter().any(|m| m.username == create.username) {
        return error(StatusCode::BAD_REQUEST, "Username already exists");
    }
    let id = inner.next_id.max(1);
    inner.next_id = id + 1;
    let mut created = member(id, &create.username);
    created.display_name = create.display_name;
    created.email = create.email;
    created.bio = create.bio;
    created.avatar_url = create.avatar_url;
    inner.members.push(created.clone());
    (StatusCode::CREATED, Json(ApiResponse::ok_with_message(created, "Created"))).into_response()
}

async fn update_member(
    State(backend): State<Backend>,
    Path(id): Path<i64>,
    Json(update): Json<CircleMemberUpdate>,
) -> Response {
    let mut inner = backend.inner.lock().unwrap();
    let Some(existing) = inner.members.iter_mut().find(|m| m.id == id) else {
        return error(StatusCode::NOT_FOUND, &format!("Circle member not found: {id}"));
    };
    if let Some(name) = update.display_name {
        existing.display_name = name;
    }
    if let Some(email) = update.email {
        existing.email = email;
    }
    if let Some(bio) = update.bio {
        existing.bio = Some(bio);
    }
    if let Some(active) = update.is_active {
        existing.is_active = active;
    }
    existing.updated_at = "2024-06-01T12:00:00".to_string();
    Json(ApiResponse::ok(existing.clone())).into_response()
}

async fn delete_member(State(backend): State<Backend>, Path(id): Path<i64>) -> Response {
    let mut inner = backend.inner.lock().unwrap();
    let before = inner.members.len();
    inner.members.retain(|m| m.id != id);
    if inner.members.len() == before {
        return error(StatusCode::NOT_FOUND, &format!("Circle member not found: {id}"));
    }
    StatusCode::NO_CONTENT.into_response()
}

async fn login(Json(request): Json<LoginRequest>) -> Response {
    if request.password != PASSWORD {
        return error(StatusCode::UNAUTHORIZED, "Invalid credentials");
    }
    Json(ApiResponse::ok(LoginResponse {
        token: format!("token-{}", request.username),
        refresh_token: None,
        user: user(&request.username),
    }))
    .into_response()
}

async fn logout(State(backend): State<Backend>) -> Response {
    if backend.inner.lock().unwrap().fail_logout {
        return error(StatusCode::SERVICE_UNAVAILABLE, "Session service unavailable");
    }
    Json(ApiResponse::ok(Value::Null)).into_response()
}

fn bearer(headers: &HeaderMap) -> Option<String> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::to_string)
}

async fn me(headers: HeaderMap) -> Response {
    match bearer(&headers).and_then(|t| t.strip_prefix("token-").map(str::to_string)) {
        Some(username) => Json(ApiResponse::ok(user(&username))).into_response(),
        None => error(StatusCode::UNAUTHORIZED, "Not authenticated"),
    }
}

async fn refresh(headers: HeaderMap) -> Response {
    match bearer(&headers) {
        Some(token) => Json(ApiResponse::ok(TokenRefresh {
            token: format!("{token}-r"),
        }))
        .into_response(),
        None => error(StatusCode::UNAUTHORIZED, "Not authenticated"),
    }
}

// ============================================================================
// Scripted transport
// ============================================================================

struct Pending {
    request: ApiRequest,
    reply: Option<oneshot::Sender<RawResponse>>,
}

/// Parks every request until the test answers it, so tests control the
/// order in which overlapping calls resolve.
#[derive(Default)]
pub struct ScriptedTransport {
    pending: Mutex<Vec<Pending>>,
}

impl ScriptedTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn arrived(&self) -> usize {
        self.pending.lock().unwrap().len()
    }

    pub fn request(&self, index: usize) -> ApiRequest {
        self.pending.lock().unwrap()[index].request.clone()
    }

    /// Wait until `count` requests have arrived
    pub async fn wait_for(&self, count: usize) {
        while self.arrived() < count {
            tokio::task::yield_now().await;
        }
    }

    pub fn respond(&self, index: usize, status: StatusCode, body: Value) {
        let reply = self.pending.lock().unwrap()[index]
            .reply
            .take()
            .expect("request already answered");
        let _ = reply.send(RawResponse::new(status, serde_json::to_vec(&body).unwrap()));
    }

    pub fn respond_ok(&self, index: usize, data: Value) {
        self.respond(index, StatusCode::OK, json!({ "data": data, "success": true }));
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> ClientResult<RawResponse> {
        let (tx, rx) = oneshot::channel();
        self.pending.lock().unwrap().push(Pending {
            request,
            reply: Some(tx),
        });
        rx.await.map_err(|_| ClientError::Unexpected)
    }
}

pub fn scripted_admin(transport: &Arc<ScriptedTransport>) -> AdminClient {
    ApiClient::with_transport(transport.clone(), &ClientConfig::default())
}

pub fn scripted_public(transport: &Arc<ScriptedTransport>) -> PublicClient {
    ApiClient::with_transport(transport.clone(), &ClientConfig::default())
}
