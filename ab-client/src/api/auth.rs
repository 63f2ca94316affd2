use serde::de::IgnoredAny;
use shared::client::{LoginRequest, LoginResponse, TokenRefresh};
use shared::models::User;

use crate::client::ApiClient;
use crate::error::ClientResult;
use crate::types::Admin;

/// `/auth` session endpoints (admin only)
///
/// These calls only talk to the backend. Keeping the client's bearer token
/// in sync is the caller's job (see `AuthStore`).
#[derive(Debug)]
pub struct AuthApi<'a> {
    client: &'a ApiClient<Admin>,
}

impl ApiClient<Admin> {
    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi { client: self }
    }
}

impl AuthApi<'_> {
    /// Login with username and password
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<LoginResponse> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        Ok(self.client.post("/auth/login", Some(&request)).await?.data)
    }

    pub async fn logout(&self) -> ClientResult<()> {
        self.client.post_empty::<IgnoredAny>("/auth/logout").await?;
        Ok(())
    }

    /// Get current user information
    pub async fn me(&self) -> ClientResult<User> {
        Ok(self.client.get("/auth/me").await?.data)
    }

    pub async fn refresh(&self) -> ClientResult<TokenRefresh> {
        Ok(self.client.post_empty("/auth/refresh").await?.data)
    }
}
