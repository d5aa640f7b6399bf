//! JWT claims structures for access and refresh tokens.
//!
//! The two claim shapes are deliberately disjoint: an access token carries
//! the principal's identity and capabilities, a refresh token carries only
//! the subject and an opaque rotation id. Decoding a token against the
//! wrong shape fails on the missing fields.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sharebox_entity::{Permission, RoleName};

/// Claims embedded in every access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject, the principal's user ID.
    pub sub: Uuid,
    /// Login email, for convenience.
    pub email: String,
    /// The principal's role at issuance time.
    pub role: RoleName,
    /// Permissions resolved for the role at issuance time.
    pub permissions: Vec<Permission>,
    /// Issuer.
    pub iss: String,
    /// Audience.
    pub aud: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

/// Claims embedded in every refresh token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshClaims {
    /// Subject, the principal's user ID.
    pub sub: Uuid,
    /// Opaque rotation id. Matched against the session store on refresh;
    /// carries no other meaning.
    pub refresh_token_id: Uuid,
    /// Issuer.
    pub iss: String,
    /// Audience.
    pub aud: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}
