//! Per-route authentication and authorization guards.
//!
//! The dispatching layer attaches a [`RoutePolicy`] to each handler and
//! calls [`RequestGuard::check`] before invoking it. Checks run in order:
//! authentication, then role, then permission; the first failure rejects
//! the request. The authenticated [`Principal`] is returned by value and
//! passed explicitly to whoever needs it; there is no ambient request
//! state.

pub mod authenticator;
pub mod authorizer;
pub mod policy;
pub mod principal;

pub use authenticator::Authenticator;
pub use authorizer::Authorizer;
pub use policy::{AuthType, RoutePolicy};
pub use principal::Principal;

use sharebox_core::events::{AuditBus, AuditEvent};
use sharebox_core::result::AppResult;

/// Composes authentication and authorization into a single entry point.
#[derive(Debug, Clone)]
pub struct RequestGuard {
    authenticator: Authenticator,
    authorizer: Authorizer,
    audit: AuditBus,
}

impl RequestGuard {
    /// Creates a new guard.
    pub fn new(authenticator: Authenticator, audit: AuditBus) -> Self {
        Self {
            authenticator,
            authorizer: Authorizer::new(),
            audit,
        }
    }

    /// Runs the full check chain for a route.
    ///
    /// Returns the authenticated principal (if the winning strategy
    /// produced one) for the handler to consume. All stages are read-only
    /// with respect to the request; a failure leaves no partial effects.
    pub fn check(
        &self,
        policy: &RoutePolicy,
        authorization_header: Option<&str>,
    ) -> AppResult<Option<Principal>> {
        policy.ensure_consistent()?;

        let principal = self.authenticator.authenticate(policy, authorization_header)?;

        if let Err(denied) = self.authorizer.authorize(policy, principal.as_ref()) {
            let performed_by = principal
                .as_ref()
                .map(|p| p.id.to_string())
                .unwrap_or_else(|| "anonymous".to_string());
            self.audit.emit(
                AuditEvent::new("authz.denied", performed_by)
                    .with_metadata(serde_json::json!({ "kind": denied.kind.to_string() })),
            );
            return Err(denied);
        }

        if policy.has_requirements() {
            if let Some(p) = principal.as_ref() {
                self.audit
                    .emit(AuditEvent::new("authz.granted", p.id.to_string()));
            }
        }

        Ok(principal)
    }
}
