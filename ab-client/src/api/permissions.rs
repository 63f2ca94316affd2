use shared::models::Permission;
use urlencoding::encode;

use crate::client::ApiClient;
use crate::error::ClientResult;
use crate::types::Admin;

/// `/permissions` (admin only, read-only)
#[derive(Debug)]
pub struct PermissionsApi<'a> {
    client: &'a ApiClient<Admin>,
}

impl ApiClient<Admin> {
    pub fn permissions(&self) -> PermissionsApi<'_> {
        PermissionsApi { client: self }
    }
}

impl PermissionsApi<'_> {
    pub async fn list(&self) -> ClientResult<Vec<Permission>> {
        Ok(self.client.get("/permissions").await?.data)
    }

    pub async fn get(&self, id: &str) -> ClientResult<Permission> {
        Ok(self.client.get(&format!("/permissions/{}", encode(id))).await?.data)
    }
}
