//! HS256 token issuer backed by an injected time source

use std::sync::Arc;

use chrono::Duration;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use pa_shared::config::TokenConfig;
use tracing::warn;

use crate::clock::Clock;
use crate::domain::entities::Claims;
use crate::errors::TokenError;

/// Minimum accepted HMAC secret length in bytes
pub const MIN_SECRET_BYTES: usize = 32;

/// Issues and verifies the signed session tokens handed out after a
/// successful OTP verification.
///
/// Construction fails when the configured secret is shorter than
/// [`MIN_SECRET_BYTES`], so a weak key is caught at startup instead of
/// at the first login.
pub struct TokenIssuer {
    expiry: Duration,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    clock: Arc<dyn Clock>,
}

impl TokenIssuer {
    /// Creates a new token issuer
    ///
    /// # Arguments
    /// * `config` - Signing secret and token lifetime
    /// * `clock` - Time source used for `iat` and expiry checks
    ///
    /// # Returns
    /// * `Err(TokenError::WeakSecret)` - Secret is shorter than [`MIN_SECRET_BYTES`]
    pub fn new(config: &TokenConfig, clock: Arc<dyn Clock>) -> Result<Self, TokenError> {
        if config.secret.len() < MIN_SECRET_BYTES {
            return Err(TokenError::WeakSecret {
                min: MIN_SECRET_BYTES,
                actual: config.secret.len(),
            });
        }
        if config.is_using_default_secret() {
            warn!(
                event = "token_default_secret",
                "JWT secret is the built-in development default; set AUTH_JWT_SECRET in production"
            );
        }

        let mut validation = Validation::new(Algorithm::HS256);
        // Lifetime is checked against the injected clock in
        // verify_token, not the decoder's wall clock.
        validation.validate_exp = false;

        Ok(Self {
            expiry: config.expiry(),
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
            clock,
        })
    }

    /// Signs a session token for the given user
    ///
    /// # Arguments
    /// * `user_id` - Identifier embedded in the `user_id` claim
    ///
    /// # Returns
    /// * `Ok(String)` - Compact JWT valid for the configured lifetime
    /// * `Err(TokenError::SigningFailed)` - Claims could not be encoded
    pub fn create_token(&self, user_id: i64) -> Result<String, TokenError> {
        let claims = Claims::new(user_id, self.clock.now(), self.expiry);
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|_| TokenError::SigningFailed)
    }

    /// Verifies a session token and returns its claims
    ///
    /// Signature and algorithm are checked first; a token signed with a
    /// different algorithm or key is rejected as invalid rather than
    /// expired.
    ///
    /// # Arguments
    /// * `token` - Compact JWT as produced by [`create_token`](Self::create_token)
    ///
    /// # Returns
    /// * `Ok(Claims)` - Token is authentic and still live
    /// * `Err(TokenError::Invalid)` - Malformed token or signature mismatch
    /// * `Err(TokenError::Expired)` - Authentic token past its `exp` claim
    pub fn verify_token(&self, token: &str) -> Result<Claims, TokenError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|_| TokenError::Invalid)?;

        let claims = token_data.claims;
        if claims.is_expired(self.clock.now()) {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }

    /// Configured token lifetime
    pub fn expiry(&self) -> Duration {
        self.expiry
    }
}
