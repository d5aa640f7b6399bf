//! Persisted role record, as supplied by the role-management collaborator.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::action::Permission;
use crate::user::role::RoleName;

/// A role with its persisted permission list.
///
/// Supplied by the external role directory; consumed read-only here.
/// Its `permissions` must agree with the static map for the same name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleRecord {
    /// Primary key.
    pub id: Uuid,
    /// The role's well-known name.
    pub name: RoleName,
    /// Human-readable label.
    pub label: String,
    /// Permissions granted to holders of this role.
    pub permissions: Vec<Permission>,
}

impl RoleRecord {
    /// Build a role record carrying the static permission set for `name`.
    pub fn with_static_permissions(name: RoleName, label: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            label: label.into(),
            permissions: super::map::permissions_for_role(name),
        }
    }
}
