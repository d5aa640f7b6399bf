//! Authorization resolver: role check, then permission check.

use tracing::{debug, warn};

use sharebox_core::error::AppError;
use sharebox_core::result::AppResult;
use sharebox_entity::Permission;

use super::policy::RoutePolicy;
use super::principal::Principal;

/// Client-visible message for every authorization denial. Which role or
/// permissions were missing is diagnostic-log material only.
const NOT_AUTHORIZED: &str = "You are not authorized to perform this action";

/// Decides allow/deny for an authenticated principal against a route's
/// declared role and permission requirements.
///
/// Both checks are pure and read-only; an undeclared check is skipped
/// ("no restriction"), never "deny all".
#[derive(Debug, Clone, Default)]
pub struct Authorizer;

impl Authorizer {
    /// Creates a new authorizer.
    pub fn new() -> Self {
        Self
    }

    /// Runs the role check, then the permission check.
    pub fn authorize(&self, policy: &RoutePolicy, principal: Option<&Principal>) -> AppResult<()> {
        if !policy.has_requirements() {
            return Ok(());
        }

        // Requirements with no principal can only happen on a route that
        // skipped authentication; that combination is a deployment mistake.
        let principal = principal.ok_or_else(|| {
            AppError::configuration(
                "Role/permission requirements evaluated without an authenticated principal",
            )
        })?;

        self.check_role(policy, principal)?;
        self.check_permissions(policy, principal)?;
        Ok(())
    }

    fn check_role(&self, policy: &RoutePolicy, principal: &Principal) -> AppResult<()> {
        if policy.roles.is_empty() {
            return Ok(());
        }

        if policy.roles.contains(&principal.role) {
            debug!(role = %principal.role, "Role check passed");
            Ok(())
        } else {
            warn!(
                user_id = %principal.id,
                role = %principal.role,
                required_roles = ?policy.roles,
                "Role check failed"
            );
            Err(AppError::forbidden(NOT_AUTHORIZED))
        }
    }

    fn check_permissions(&self, policy: &RoutePolicy, principal: &Principal) -> AppResult<()> {
        if policy.permissions.is_empty() {
            return Ok(());
        }

        let held = principal.effective_permissions();
        let missing: Vec<Permission> = policy
            .permissions
            .iter()
            .filter(|required| !held.contains(required))
            .copied()
            .collect();

        if missing.is_empty() {
            debug!(user_id = %principal.id, "Permission check passed");
            Ok(())
        } else {
            warn!(
                user_id = %principal.id,
                role = %principal.role,
                missing = ?missing,
                "Permission check failed"
            );
            Err(AppError::forbidden(NOT_AUTHORIZED))
        }
    }
}
