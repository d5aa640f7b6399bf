//! JWT token creation with configurable signing, audience, issuer, and TTL.

use chrono::{DateTime, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

use sharebox_core::config::auth::AuthConfig;
use sharebox_entity::{Permission, RoleName};

use super::claims::{AccessClaims, RefreshClaims};
use super::error::TokenError;

/// Creates signed JWT access and refresh tokens.
///
/// Configured once at startup; the secret, issuer, audience, and TTLs are
/// invariant for the process lifetime and shared with [`super::JwtDecoder`].
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// `iss` claim stamped into every token.
    issuer: String,
    /// `aud` claim stamped into every token.
    audience: String,
    /// Access token TTL in seconds.
    access_ttl_seconds: i64,
    /// Refresh token TTL in seconds.
    refresh_ttl_seconds: i64,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .field("access_ttl_seconds", &self.access_ttl_seconds)
            .field("refresh_ttl_seconds", &self.refresh_ttl_seconds)
            .finish()
    }
}

/// Result of a successful token pair generation.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TokenPair {
    /// Short-lived access token.
    pub access_token: String,
    /// Long-lived refresh token.
    pub refresh_token: String,
    /// Access token expiration timestamp.
    pub access_expires_at: DateTime<Utc>,
    /// Refresh token expiration timestamp.
    pub refresh_expires_at: DateTime<Utc>,
    /// The rotation id embedded in the refresh token. Installed in the
    /// session store as the principal's single valid refresh token.
    pub refresh_token_id: Uuid,
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            issuer: config.jwt_issuer.clone(),
            audience: config.jwt_audience.clone(),
            access_ttl_seconds: config.jwt_access_ttl_seconds as i64,
            refresh_ttl_seconds: config.jwt_refresh_ttl_seconds as i64,
        }
    }

    /// Signs an access token embedding the principal's role and permissions.
    pub fn sign_access_token(
        &self,
        user_id: Uuid,
        email: &str,
        role: RoleName,
        permissions: &[Permission],
    ) -> Result<(String, DateTime<Utc>), TokenError> {
        let now = Utc::now();
        let exp = now + chrono::Duration::seconds(self.access_ttl_seconds);

        let claims = AccessClaims {
            sub: user_id,
            email: email.to_string(),
            role,
            permissions: permissions.to_vec(),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };

        let token =
            encode(&Header::default(), &claims, &self.encoding_key).map_err(|_| TokenError::Signing)?;

        Ok((token, exp))
    }

    /// Signs a refresh token embedding the given rotation id.
    pub fn sign_refresh_token(
        &self,
        user_id: Uuid,
        refresh_token_id: Uuid,
    ) -> Result<(String, DateTime<Utc>), TokenError> {
        let now = Utc::now();
        let exp = now + chrono::Duration::seconds(self.refresh_ttl_seconds);

        let claims = RefreshClaims {
            sub: user_id,
            refresh_token_id,
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };

        let token =
            encode(&Header::default(), &claims, &self.encoding_key).map_err(|_| TokenError::Signing)?;

        Ok((token, exp))
    }

    /// Generates an access + refresh pair with a fresh rotation id.
    pub fn generate_token_pair(
        &self,
        user_id: Uuid,
        email: &str,
        role: RoleName,
        permissions: &[Permission],
    ) -> Result<TokenPair, TokenError> {
        let refresh_token_id = Uuid::new_v4();

        let (access_token, access_expires_at) =
            self.sign_access_token(user_id, email, role, permissions)?;
        let (refresh_token, refresh_expires_at) =
            self.sign_refresh_token(user_id, refresh_token_id)?;

        Ok(TokenPair {
            access_token,
            refresh_token,
            access_expires_at,
            refresh_expires_at,
            refresh_token_id,
        })
    }

    /// The configured refresh TTL in seconds, used to bound session records.
    pub fn refresh_ttl_seconds(&self) -> u64 {
        self.refresh_ttl_seconds as u64
    }
}
