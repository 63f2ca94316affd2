use serde::de::IgnoredAny;
use shared::models::{CircleMember, CircleMemberCreate, CircleMemberUpdate};
use urlencoding::encode;

use crate::client::ApiClient;
use crate::error::ClientResult;
use crate::types::{Admin, Surface};

/// `/circle-members`
#[derive(Debug)]
pub struct CircleMembersApi<'a, S: Surface> {
    client: &'a ApiClient<S>,
}

impl<S: Surface> ApiClient<S> {
    pub fn circle_members(&self) -> CircleMembersApi<'_, S> {
        CircleMembersApi { client: self }
    }
}

impl<S: Surface> CircleMembersApi<'_, S> {
    pub async fn list(&self) -> ClientResult<Vec<CircleMember>> {
        Ok(self.client.get("/circle-members").await?.data)
    }

    pub async fn active(&self) -> ClientResult<Vec<CircleMember>> {
        Ok(self.client.get("/circle-members/active").await?.data)
    }

    pub async fn get(&self, id: i64) -> ClientResult<CircleMember> {
        Ok(self.client.get(&format!("/circle-members/{id}")).await?.data)
    }

    pub async fn get_by_username(&self, username: &str) -> ClientResult<CircleMember> {
        Ok(self
            .client
            .get(&format!("/circle-members/username/{}", encode(username)))
            .await?
            .data)
    }
}

impl CircleMembersApi<'_, Admin> {
    pub async fn create(&self, member: &CircleMemberCreate) -> ClientResult<CircleMember> {
        Ok(self.client.post("/circle-members", Some(member)).await?.data)
    }

    pub async fn update(&self, id: i64, update: &CircleMemberUpdate) -> ClientResult<CircleMember> {
        Ok(self
            .client
            .put(&format!("/circle-members/{id}"), Some(update))
            .await?
            .data)
    }

    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        self.client
            .delete::<IgnoredAny>(&format!("/circle-members/{id}"))
            .await?;
        Ok(())
    }
}
