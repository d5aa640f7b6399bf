//! Declarative per-route authentication and authorization requirements.

use serde::{Deserialize, Serialize};

use sharebox_core::error::AppError;
use sharebox_entity::{Permission, RoleName};

/// How a route may be authenticated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthType {
    /// No authentication; no principal is populated.
    None,
    /// Bearer token in the `Authorization` header.
    Bearer,
}

/// The authentication and authorization requirements of one route.
///
/// Built by the dispatching layer alongside each handler definition. A
/// route with no declared auth types defaults to `Bearer`; unauthenticated
/// access must be opted into, never fallen into.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoutePolicy {
    /// Acceptable authentication strategies, tried in declaration order.
    #[serde(default)]
    pub auth_types: Vec<AuthType>,
    /// Allowed roles; empty means no role restriction.
    #[serde(default)]
    pub roles: Vec<RoleName>,
    /// Required permissions; empty means no permission restriction.
    #[serde(default)]
    pub permissions: Vec<Permission>,
}

/// The strategy applied when a route declares none.
const DEFAULT_AUTH_TYPES: &[AuthType] = &[AuthType::Bearer];

impl RoutePolicy {
    /// A bearer-protected route with no role or permission restriction.
    pub fn bearer() -> Self {
        Self {
            auth_types: vec![AuthType::Bearer],
            roles: Vec::new(),
            permissions: Vec::new(),
        }
    }

    /// A route requiring no authentication.
    pub fn public() -> Self {
        Self {
            auth_types: vec![AuthType::None],
            roles: Vec::new(),
            permissions: Vec::new(),
        }
    }

    /// Restricts the route to the given roles.
    pub fn with_roles(mut self, roles: impl IntoIterator<Item = RoleName>) -> Self {
        self.roles = roles.into_iter().collect();
        self
    }

    /// Requires every listed permission.
    pub fn with_permissions(mut self, permissions: impl IntoIterator<Item = Permission>) -> Self {
        self.permissions = permissions.into_iter().collect();
        self
    }

    /// The strategies to evaluate, falling back to the fail-closed default.
    pub fn effective_auth_types(&self) -> &[AuthType] {
        if self.auth_types.is_empty() {
            DEFAULT_AUTH_TYPES
        } else {
            &self.auth_types
        }
    }

    /// Whether the route declares any role or permission requirement.
    pub fn has_requirements(&self) -> bool {
        !self.roles.is_empty() || !self.permissions.is_empty()
    }

    /// Rejects policies that can never be satisfied.
    ///
    /// A route whose only strategy is `None` cannot produce a principal,
    /// so declaring roles or permissions on it is a configuration error,
    /// not a runtime denial.
    pub fn ensure_consistent(&self) -> Result<(), AppError> {
        let only_public = self
            .effective_auth_types()
            .iter()
            .all(|t| *t == AuthType::None);

        if only_public && self.has_requirements() {
            return Err(AppError::configuration(
                "Route declares role/permission requirements but accepts unauthenticated access",
            ));
        }
        Ok(())
    }
}
