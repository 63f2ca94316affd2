use serde::de::IgnoredAny;
use shared::models::{User, UserCreate, UserUpdate};
use shared::request::with_query;
use shared::{ListQuery, PaginatedResponse};
use urlencoding::encode;

use crate::client::ApiClient;
use crate::error::ClientResult;
use crate::types::Admin;

/// `/users` (admin only)
#[derive(Debug)]
pub struct UsersApi<'a> {
    client: &'a ApiClient<Admin>,
}

impl ApiClient<Admin> {
    pub fn users(&self) -> UsersApi<'_> {
        UsersApi { client: self }
    }
}

impl UsersApi<'_> {
    pub async fn list(&self, query: &ListQuery) -> ClientResult<PaginatedResponse<User>> {
        let path = with_query("/users", &query.to_query_string());
        Ok(self.client.get(&path).await?.data)
    }

    pub async fn get(&self, id: &str) -> ClientResult<User> {
        Ok(self.client.get(&format!("/users/{}", encode(id))).await?.data)
    }

    pub async fn create(&self, user: &UserCreate) -> ClientResult<User> {
        Ok(self.client.post("/users", Some(user)).await?.data)
    }

    pub async fn update(&self, id: &str, update: &UserUpdate) -> ClientResult<User> {
        Ok(self.client.put(&format!("/users/{}", encode(id)), Some(update)).await?.data)
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.client.delete::<IgnoredAny>(&format!("/users/{}", encode(id))).await?;
        Ok(())
    }
}
