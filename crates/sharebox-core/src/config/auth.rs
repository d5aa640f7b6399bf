//! Authentication and token-issuer configuration.

use serde::{Deserialize, Serialize};

/// Authentication and credential configuration.
///
/// The `jwt_*` values must be identical between the token signer and
/// verifier; a mismatch is a configuration error, not something the
/// runtime recovers from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Value of the `iss` claim stamped into and required of every token.
    #[serde(default = "default_jwt_issuer")]
    pub jwt_issuer: String,
    /// Value of the `aud` claim stamped into and required of every token.
    #[serde(default = "default_jwt_audience")]
    pub jwt_audience: String,
    /// Access token TTL in seconds.
    #[serde(default = "default_access_ttl")]
    pub jwt_access_ttl_seconds: u64,
    /// Refresh token TTL in seconds.
    #[serde(default = "default_refresh_ttl")]
    pub jwt_refresh_ttl_seconds: u64,
    /// Minimum password length accepted at sign-up.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            jwt_issuer: default_jwt_issuer(),
            jwt_audience: default_jwt_audience(),
            jwt_access_ttl_seconds: default_access_ttl(),
            jwt_refresh_ttl_seconds: default_refresh_ttl(),
            password_min_length: default_password_min(),
        }
    }
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_jwt_issuer() -> String {
    "sharebox".to_string()
}

fn default_jwt_audience() -> String {
    "sharebox-api".to_string()
}

fn default_access_ttl() -> u64 {
    900
}

fn default_refresh_ttl() -> u64 {
    86400
}

fn default_password_min() -> usize {
    8
}
