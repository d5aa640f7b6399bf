//! Account service: orchestrates sign-up, sign-in, and token rotation.

use std::sync::Arc;

use tracing::{error, info, warn};
use uuid::Uuid;

use sharebox_core::config::auth::AuthConfig;
use sharebox_core::error::AppError;
use sharebox_core::events::{AuditBus, AuditEvent};
use sharebox_core::result::AppResult;
use sharebox_entity::{RoleName, RoleRecord, User};

use crate::jwt::{JwtDecoder, JwtEncoder, TokenPair};
use crate::password::{PasswordHasher, check_password_policy};
use crate::session::SessionStore;

use super::repository::{RoleDirectory, UserRepository};

/// Client-visible message for every sign-in failure. Unknown email and
/// wrong password are deliberately indistinguishable.
const INVALID_CREDENTIALS: &str = "Incorrect email or password";

/// Client-visible message for every refresh failure.
const INVALID_REFRESH: &str = "Invalid refresh token";

/// Orchestrates the account lifecycle on top of the credential hasher,
/// token issuer, and session store.
pub struct AccountService {
    users: Arc<dyn UserRepository>,
    roles: Arc<dyn RoleDirectory>,
    hasher: PasswordHasher,
    encoder: JwtEncoder,
    decoder: JwtDecoder,
    sessions: Arc<dyn SessionStore>,
    audit: AuditBus,
    password_min_length: usize,
    /// Digest verified on the unknown-email path so that sign-in with an
    /// unknown email takes about as long as one with a wrong password.
    dummy_digest: String,
}

impl AccountService {
    /// Creates a new account service.
    pub fn new(
        config: &AuthConfig,
        users: Arc<dyn UserRepository>,
        roles: Arc<dyn RoleDirectory>,
        sessions: Arc<dyn SessionStore>,
        audit: AuditBus,
    ) -> AppResult<Self> {
        let hasher = PasswordHasher::new();
        let dummy_digest = hasher.hash("timing-equalizer")?;

        Ok(Self {
            users,
            roles,
            hasher,
            encoder: JwtEncoder::new(config),
            decoder: JwtDecoder::new(config),
            sessions,
            audit,
            password_min_length: config.password_min_length,
            dummy_digest,
        })
    }

    /// Registers a new account bound to the lowest-privilege default role.
    ///
    /// The only account-creation path that requires no prior
    /// authentication.
    pub async fn sign_up(&self, email: &str, password: &str, name: &str) -> AppResult<User> {
        info!(email = %email, "Attempting sign-up");

        check_password_policy(password, self.password_min_length)?;

        if self.users.find_by_email(email).await?.is_some() {
            warn!(email = %email, "Sign-up failed: email already registered");
            return Err(AppError::conflict("User already exists"));
        }

        let default_role = self
            .roles
            .find_by_name(RoleName::Guest)
            .await?
            .ok_or_else(|| {
                error!("Default role 'guest' not found");
                AppError::configuration("Default role 'guest' not found")
            })?;

        let password_hash = self.hasher.hash(password)?;
        let user = self
            .users
            .create(&User::new(name, email, password_hash, default_role.id))
            .await?;

        info!(user_id = %user.id, email = %email, role = %default_role.name, "User created");
        self.audit.emit(
            AuditEvent::new("auth.sign_up", user.id.to_string()).with_resource(user.id.to_string()),
        );

        Ok(user)
    }

    /// Verifies credentials and issues a fresh token pair, installing its
    /// rotation id as the principal's single active session.
    pub async fn sign_in(&self, email: &str, password: &str) -> AppResult<TokenPair> {
        info!(email = %email, "Attempting sign-in");

        let user = match self.users.find_by_email(email).await? {
            Some(user) => user,
            None => {
                // Burn a comparable amount of work before answering, so the
                // unknown-email path is not observably faster.
                let _ = self.hasher.verify(password, &self.dummy_digest);
                warn!(email = %email, "Sign-in failed: unknown email");
                return Err(AppError::unauthenticated(INVALID_CREDENTIALS));
            }
        };

        if !self.hasher.verify(password, &user.password_hash) {
            warn!(email = %email, "Sign-in failed: password mismatch");
            return Err(AppError::unauthenticated(INVALID_CREDENTIALS));
        }

        let pair = self.issue_tokens(&user).await?;

        info!(user_id = %user.id, "User signed in");
        self.audit.emit(
            AuditEvent::new("auth.sign_in", user.id.to_string()).with_resource(user.id.to_string()),
        );

        Ok(pair)
    }

    /// Rotates a refresh token: verifies it, atomically consumes its
    /// rotation id, and issues a brand-new pair with a brand-new id.
    ///
    /// A previously issued but since-superseded token is rejected here
    /// (the revocation check), and a second concurrent refresh with the
    /// same token loses the consume race and is rejected the same way.
    pub async fn refresh_tokens(&self, refresh_token: &str) -> AppResult<TokenPair> {
        let claims = self.decoder.decode_refresh_token(refresh_token).map_err(|e| {
            warn!(reason = %e, "Refresh failed: token verification");
            AppError::unauthenticated(INVALID_REFRESH)
        })?;

        let user = self
            .users
            .find_by_id(claims.sub)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %claims.sub, "Refresh failed: user not found");
                AppError::unauthenticated(INVALID_REFRESH)
            })?;

        let consumed = self
            .sessions
            .consume(user.id, claims.refresh_token_id)
            .await
            .unwrap_or_else(|e| {
                // Store unreachable or timed out: fail the check closed.
                warn!(error = %e, user_id = %user.id, "Refresh failed: session store error");
                false
            });

        if !consumed {
            warn!(user_id = %user.id, "Refresh failed: stale or unknown refresh token id");
            return Err(AppError::unauthenticated(INVALID_REFRESH));
        }

        let pair = self.issue_tokens(&user).await?;

        info!(user_id = %user.id, "Tokens refreshed");
        self.audit.emit(
            AuditEvent::new("auth.refresh", user.id.to_string()).with_resource(user.id.to_string()),
        );

        Ok(pair)
    }

    /// Removes the principal's session record, making any outstanding
    /// refresh token unusable. Idempotent.
    pub async fn sign_out(&self, principal_id: Uuid) -> AppResult<()> {
        self.sessions.invalidate(principal_id).await?;

        info!(user_id = %principal_id, "User signed out");
        self.audit
            .emit(AuditEvent::new("auth.sign_out", principal_id.to_string()));

        Ok(())
    }

    /// Resolves the user's role, signs a pair embedding role+permissions,
    /// and unconditionally installs the new rotation id.
    async fn issue_tokens(&self, user: &User) -> AppResult<TokenPair> {
        let role = self.resolve_role(user).await?;

        let pair = self
            .encoder
            .generate_token_pair(user.id, &user.email, role.name, &role.permissions)
            .map_err(|e| AppError::internal(format!("Token signing failed: {e}")))?;

        self.sessions.insert(user.id, pair.refresh_token_id).await?;

        Ok(pair)
    }

    async fn resolve_role(&self, user: &User) -> AppResult<RoleRecord> {
        self.roles.find_by_id(user.role_id).await?.ok_or_else(|| {
            error!(user_id = %user.id, role_id = %user.role_id, "Role record not found");
            AppError::not_found("Role not found")
        })
    }
}

impl std::fmt::Debug for AccountService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountService")
            .field("encoder", &self.encoder)
            .field("password_min_length", &self.password_min_length)
            .finish()
    }
}
