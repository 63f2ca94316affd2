use serde::de::IgnoredAny;
use shared::models::{Role, RoleCreate, RoleUpdate};
use urlencoding::encode;

use crate::client::ApiClient;
use crate::error::ClientResult;
use crate::types::{Admin, Surface};

/// `/roles`
#[derive(Debug)]
pub struct RolesApi<'a, S: Surface> {
    client: &'a ApiClient<S>,
}

impl<S: Surface> ApiClient<S> {
    pub fn roles(&self) -> RolesApi<'_, S> {
        RolesApi { client: self }
    }
}

impl<S: Surface> RolesApi<'_, S> {
    pub async fn list(&self) -> ClientResult<Vec<Role>> {
        Ok(self.client.get("/roles").await?.data)
    }

    pub async fn get(&self, id: i64) -> ClientResult<Role> {
        Ok(self.client.get(&format!("/roles/{id}")).await?.data)
    }

    pub async fn get_by_name(&self, name: &str) -> ClientResult<Role> {
        Ok(self.client.get(&format!("/roles/name/{}", encode(name))).await?.data)
    }
}

impl RolesApi<'_, Admin> {
    pub async fn create(&self, role: &RoleCreate) -> ClientResult<Role> {
        Ok(self.client.post("/roles", Some(role)).await?.data)
    }

    pub async fn update(&self, id: i64, update: &RoleUpdate) -> ClientResult<Role> {
        Ok(self.client.put(&format!("/roles/{id}"), Some(update)).await?.data)
    }

    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        self.client.delete::<IgnoredAny>(&format!("/roles/{id}")).await?;
        Ok(())
    }
}
