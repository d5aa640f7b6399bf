//! JWT token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use sharebox_core::config::auth::AuthConfig;

use super::claims::{AccessClaims, RefreshClaims};
use super::error::TokenError;

/// Validates JWT tokens against the configured secret, audience, and issuer.
///
/// Verification is CPU-bound and synchronous. Failures carry a
/// distinguishable [`TokenError`] variant for logging; callers normalize
/// to `Unauthenticated` before the transport boundary.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration (algorithm, exp, aud, iss).
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    ///
    /// The configuration must be the same instance handed to the encoder;
    /// a mismatch is a deployment error, not something verification can
    /// recover from.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew
        validation.set_audience(&[&config.jwt_audience]);
        validation.set_issuer(&[&config.jwt_issuer]);

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates an access token string.
    ///
    /// Checks signature, expiry, audience, and issuer. A refresh token
    /// presented here fails as malformed: it lacks the access claim shape.
    pub fn decode_access_token(&self, token: &str) -> Result<AccessClaims, TokenError> {
        let data = decode::<AccessClaims>(token, &self.decoding_key, &self.validation)
            .map_err(TokenError::from)?;
        Ok(data.claims)
    }

    /// Decodes and validates a refresh token string.
    pub fn decode_refresh_token(&self, token: &str) -> Result<RefreshClaims, TokenError> {
        let data = decode::<RefreshClaims>(token, &self.decoding_key, &self.validation)
            .map_err(TokenError::from)?;
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::encoder::JwtEncoder;
    use sharebox_entity::{Permission, RoleName};
    use uuid::Uuid;

    fn config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "unit-test-secret".into(),
            jwt_issuer: "sharebox".into(),
            jwt_audience: "sharebox-api".into(),
            jwt_access_ttl_seconds: 900,
            jwt_refresh_ttl_seconds: 86400,
            password_min_length: 8,
        }
    }

    #[test]
    fn test_round_trip_access_token() {
        let cfg = config();
        let encoder = JwtEncoder::new(&cfg);
        let decoder = JwtDecoder::new(&cfg);
        let user_id = Uuid::new_v4();

        let (token, _) = encoder
            .sign_access_token(user_id, "a@b.c", RoleName::Employee, &[Permission::FileRead])
            .unwrap();

        let claims = decoder.decode_access_token(&token).unwrap();
        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.role, RoleName::Employee);
        assert_eq!(claims.permissions, vec![Permission::FileRead]);
    }

    #[test]
    fn test_garbage_is_malformed() {
        let decoder = JwtDecoder::new(&config());
        assert_eq!(
            decoder.decode_access_token("not-a-jwt").unwrap_err(),
            TokenError::Malformed
        );
    }

    #[test]
    fn test_wrong_secret_is_invalid_signature() {
        let cfg = config();
        let encoder = JwtEncoder::new(&cfg);
        let mut other = config();
        other.jwt_secret = "some-other-secret".into();
        let decoder = JwtDecoder::new(&other);

        let (token, _) = encoder
            .sign_access_token(Uuid::new_v4(), "a@b.c", RoleName::Guest, &[])
            .unwrap();

        assert_eq!(
            decoder.decode_access_token(&token).unwrap_err(),
            TokenError::InvalidSignature
        );
    }

    #[test]
    fn test_wrong_audience_is_rejected() {
        let cfg = config();
        let encoder = JwtEncoder::new(&cfg);
        let mut other = config();
        other.jwt_audience = "some-other-api".into();
        let decoder = JwtDecoder::new(&other);

        let (token, _) = encoder
            .sign_access_token(Uuid::new_v4(), "a@b.c", RoleName::Guest, &[])
            .unwrap();

        assert_eq!(
            decoder.decode_access_token(&token).unwrap_err(),
            TokenError::InvalidAudience
        );
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let cfg = config();
        let decoder = JwtDecoder::new(&cfg);
        let now = chrono::Utc::now().timestamp();

        // Craft a token that expired well beyond the decoder's leeway.
        let claims = AccessClaims {
            sub: Uuid::new_v4(),
            email: "a@b.c".into(),
            role: RoleName::Guest,
            permissions: vec![],
            iss: cfg.jwt_issuer.clone(),
            aud: cfg.jwt_audience.clone(),
            iat: now - 1000,
            exp: now - 500,
        };
        let token = jsonwebtoken::encode(
            &jsonwebtoken::Header::default(),
            &claims,
            &jsonwebtoken::EncodingKey::from_secret(cfg.jwt_secret.as_bytes()),
        )
        .unwrap();

        assert_eq!(
            decoder.decode_access_token(&token).unwrap_err(),
            TokenError::Expired
        );
    }

    #[test]
    fn test_refresh_token_rejected_as_access_token() {
        let cfg = config();
        let encoder = JwtEncoder::new(&cfg);
        let decoder = JwtDecoder::new(&cfg);

        let (refresh, _) = encoder
            .sign_refresh_token(Uuid::new_v4(), Uuid::new_v4())
            .unwrap();

        assert_eq!(
            decoder.decode_access_token(&refresh).unwrap_err(),
            TokenError::Malformed
        );
    }
}
