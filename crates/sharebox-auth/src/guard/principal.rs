//! The authenticated identity for the current request.

use uuid::Uuid;

use sharebox_entity::{Permission, RoleName, permission::permissions_for_role};

use crate::jwt::AccessClaims;

/// The authenticated identity and its resolved role/permissions.
///
/// Reconstructed from verified access-token claims on every request and
/// discarded when the request ends; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Principal {
    /// The user ID.
    pub id: Uuid,
    /// Login email.
    pub email: String,
    /// The role held at token issuance.
    pub role: RoleName,
    /// Permissions embedded in the token claims.
    pub permissions: Vec<Permission>,
}

impl Principal {
    /// The principal's effective permission set: the claims when the token
    /// embeds them, otherwise the static mapping for the role. Both paths
    /// produce the same set for consistent role data.
    pub fn effective_permissions(&self) -> Vec<Permission> {
        if self.permissions.is_empty() {
            permissions_for_role(self.role)
        } else {
            self.permissions.clone()
        }
    }

    /// Whether the principal holds the given permission.
    pub fn has_permission(&self, permission: Permission) -> bool {
        self.effective_permissions().contains(&permission)
    }
}

impl From<AccessClaims> for Principal {
    fn from(claims: AccessClaims) -> Self {
        Self {
            id: claims.sub,
            email: claims.email,
            role: claims.role,
            permissions: claims.permissions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_claims_fall_back_to_static_map() {
        let principal = Principal {
            id: Uuid::new_v4(),
            email: "g@example.com".into(),
            role: RoleName::Guest,
            permissions: vec![],
        };
        assert!(principal.has_permission(Permission::FileRead));
        assert!(!principal.has_permission(Permission::FileUpload));
    }

    #[test]
    fn test_embedded_claims_take_precedence() {
        let principal = Principal {
            id: Uuid::new_v4(),
            email: "m@example.com".into(),
            role: RoleName::Guest,
            permissions: vec![Permission::FileUpload],
        };
        assert!(principal.has_permission(Permission::FileUpload));
    }
}
