use serde_json::Value;
use shared::models::HealthStatus;

use crate::client::ApiClient;
use crate::error::ClientResult;
use crate::types::{Admin, Surface};

/// `/system`
#[derive(Debug)]
pub struct SystemApi<'a, S: Surface> {
    client: &'a ApiClient<S>,
}

impl<S: Surface> ApiClient<S> {
    pub fn system(&self) -> SystemApi<'_, S> {
        SystemApi { client: self }
    }
}

impl<S: Surface> SystemApi<'_, S> {
    pub async fn health(&self) -> ClientResult<HealthStatus> {
        Ok(self.client.get("/system/health").await?.data)
    }

    pub async fn status(&self) -> ClientResult<Value> {
        Ok(self.client.get("/system/status").await?.data)
    }
}

impl SystemApi<'_, Admin> {
    pub async fn config(&self) -> ClientResult<Value> {
        Ok(self.client.get("/system/config").await?.data)
    }
}
