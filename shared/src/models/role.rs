//! Role Model

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::Permission;

fn default_active() -> bool {
    true
}

/// Role entity (RBAC)
///
/// Role listings omit `isActive` and `permissions`, so both default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub permissions: Vec<Permission>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Role {
    /// Whether any active permission grants `action` on `resource`
    pub fn grants(&self, resource: &str, action: &str) -> bool {
        self.permissions
            .iter()
            .any(|p| p.is_active && p.resource == resource && p.action == action)
    }
}

/// Create role payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RoleCreate {
    #[validate(length(min = 1, max = 50, message = "role name must be 1-50 characters"))]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 255, message = "description must be at most 255 characters"))]
    pub description: Option<String>,
    #[serde(default)]
    pub permission_ids: Vec<String>,
}

/// Update role payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RoleUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 50, message = "role name must be 1-50 characters"))]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 255, message = "description must be at most 255 characters"))]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission_ids: Option<Vec<String>>,
}
