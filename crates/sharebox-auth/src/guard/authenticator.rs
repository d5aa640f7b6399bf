//! Authentication resolver: runs a route's declared strategies in order.

use tracing::{debug, warn};

use sharebox_core::error::AppError;
use sharebox_core::result::AppResult;

use crate::jwt::JwtDecoder;

use super::policy::{AuthType, RoutePolicy};
use super::principal::Principal;

/// Client-visible message for every bearer verification failure. The
/// concrete reason (expired vs forged vs wrong audience) goes to logs only.
const INVALID_TOKEN: &str = "Invalid or expired token";

/// Resolves which authentication strategy applies to a route and runs it.
#[derive(Debug, Clone)]
pub struct Authenticator {
    /// Verifies bearer tokens.
    decoder: JwtDecoder,
}

impl Authenticator {
    /// Creates a new authenticator.
    pub fn new(decoder: JwtDecoder) -> Self {
        Self { decoder }
    }

    /// Runs the route's strategies in declaration order and returns the
    /// first success (short-circuit OR).
    ///
    /// `None` succeeds without a principal. `Bearer` requires a valid
    /// `Authorization: Bearer <token>` header. When every strategy fails,
    /// the last strategy's error is returned.
    pub fn authenticate(
        &self,
        policy: &RoutePolicy,
        authorization_header: Option<&str>,
    ) -> AppResult<Option<Principal>> {
        let mut last_error = AppError::unauthenticated(INVALID_TOKEN);

        for auth_type in policy.effective_auth_types() {
            match auth_type {
                AuthType::None => {
                    debug!("Route is public, skipping authentication");
                    return Ok(None);
                }
                AuthType::Bearer => match self.bearer(authorization_header) {
                    Ok(principal) => {
                        debug!(user_id = %principal.id, "Bearer authentication succeeded");
                        return Ok(Some(principal));
                    }
                    Err(err) => {
                        warn!(error = %err, "Bearer authentication failed");
                        last_error = err;
                    }
                },
            }
        }

        Err(last_error)
    }

    /// The bearer strategy: extract, verify, build the principal.
    fn bearer(&self, authorization_header: Option<&str>) -> AppResult<Principal> {
        let header = authorization_header
            .ok_or_else(|| AppError::unauthenticated("Missing Authorization header"))?;

        let token = header
            .strip_prefix("Bearer ")
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::unauthenticated("Invalid Authorization header format"))?;

        let claims = self.decoder.decode_access_token(token).map_err(|e| {
            // Log the distinguishable reason; the client sees one message
            // for all of them to avoid an oracle.
            warn!(reason = %e, "Access token verification failed");
            AppError::unauthenticated(INVALID_TOKEN)
        })?;

        Ok(Principal::from(claims))
    }
}
