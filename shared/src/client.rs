//! Auth DTOs shared between the backend contract and the clients

use serde::{Deserialize, Serialize};

use crate::models::User;

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response data
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    pub user: User,
}

/// Token refresh response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenRefresh {
    pub token: String,
}
