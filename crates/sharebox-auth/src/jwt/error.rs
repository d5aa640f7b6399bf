//! Distinguishable token verification failures.

use thiserror::Error;

/// Why a token failed to verify.
///
/// The variant is for logs and tests only: every variant is normalized to
/// a single `Unauthenticated` error before it reaches the transport
/// boundary, so clients cannot distinguish an expired token from a forged
/// one.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    /// The token's expiry has passed.
    #[error("token has expired")]
    Expired,
    /// The signature does not match the configured secret.
    #[error("token signature is invalid")]
    InvalidSignature,
    /// The `aud` claim does not match the configured audience.
    #[error("token audience mismatch")]
    InvalidAudience,
    /// The `iss` claim does not match the configured issuer.
    #[error("token issuer mismatch")]
    InvalidIssuer,
    /// The token is not a well-formed JWT or carries the wrong claim shape
    /// (e.g. a refresh token presented where an access token is expected).
    #[error("token is malformed")]
    Malformed,
    /// Signing failed. Only possible with a broken key configuration.
    #[error("token could not be signed")]
    Signing,
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;
        match err.kind() {
            ErrorKind::ExpiredSignature => Self::Expired,
            ErrorKind::InvalidSignature => Self::InvalidSignature,
            ErrorKind::InvalidAudience => Self::InvalidAudience,
            ErrorKind::InvalidIssuer => Self::InvalidIssuer,
            _ => Self::Malformed,
        }
    }
}
