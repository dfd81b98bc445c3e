//! Main authentication orchestrator implementation

use std::future::Future;
use std::sync::Arc;

use pa_shared::types::{PaginatedResponse, Pagination};
use tokio::time::timeout;
use tracing::{info, warn};

use crate::clock::Clock;
use crate::domain::entities::User;
use crate::domain::value_objects::AuthResponse;
use crate::errors::{AuthError, AuthResult};
use crate::repositories::UserRepository;
use crate::services::identity::IdentityResolver;
use crate::services::otp::{OtpGenerator, OtpStore};
use crate::services::rate_limit::RateLimiter;
use crate::services::token::TokenIssuer;

use super::config::AuthServiceConfig;
use super::delivery::DeliveryChannel;

/// Authentication orchestrator for the complete OTP login flow
///
/// Owns no I/O of its own; every collaborator is injected behind a
/// trait so the flow can run against in-memory parts in tests and
/// production backends unchanged.
pub struct AuthService<O, L, U, D>
where
    O: OtpStore,
    L: RateLimiter,
    U: UserRepository,
    D: DeliveryChannel,
{
    /// Store holding issued codes until consumption or expiry
    otp_store: Arc<O>,
    /// Limiter throttling issuance per key
    rate_limiter: Arc<L>,
    /// Resolver mapping verified keys to accounts
    identity: IdentityResolver<U>,
    /// Channel that carries codes to the recipient
    delivery: Arc<D>,
    /// Issuer for session tokens handed out on login
    token_issuer: Arc<TokenIssuer>,
    /// Generator for fresh OTP codes
    generator: OtpGenerator,
    /// Orchestrator configuration
    config: AuthServiceConfig,
}

impl<O, L, U, D> AuthService<O, L, U, D>
where
    O: OtpStore,
    L: RateLimiter,
    U: UserRepository,
    D: DeliveryChannel,
{
    /// Create a new authentication orchestrator
    ///
    /// # Arguments
    ///
    /// * `otp_store` - Store for issued codes
    /// * `rate_limiter` - Issuance throttle
    /// * `user_repository` - Account persistence
    /// * `delivery` - Channel that carries codes to recipients
    /// * `token_issuer` - Session token signer
    /// * `generator` - OTP code generator
    /// * `clock` - Time source shared with the collaborators
    /// * `config` - Orchestrator configuration
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        otp_store: Arc<O>,
        rate_limiter: Arc<L>,
        user_repository: Arc<U>,
        delivery: Arc<D>,
        token_issuer: Arc<TokenIssuer>,
        generator: OtpGenerator,
        clock: Arc<dyn Clock>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            otp_store,
            rate_limiter,
            identity: IdentityResolver::new(user_repository, clock),
            delivery,
            token_issuer,
            generator,
            config,
        }
    }

    /// Issue a fresh OTP code for a key
    ///
    /// This method:
    /// 1. Checks the issuance rate limit for the key
    /// 2. Generates a fresh code
    /// 3. Stores it under the key, replacing any previous code
    /// 4. Hands the code to the delivery channel
    ///
    /// Delivery failures are logged but do not fail issuance; the
    /// stored code stays valid and the client may request another.
    ///
    /// # Arguments
    ///
    /// * `key` - Opaque identity key, typically a phone number
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Code stored and handed to delivery
    /// * `Err(AuthError::RateLimited)` - Key exhausted its issuance window
    /// * `Err(AuthError::Timeout)` - A collaborator missed its deadline
    pub async fn issue_otp(&self, key: &str) -> AuthResult<()> {
        // Step 1: Check the issuance rate limit for this key
        let admitted = self
            .with_deadline(self.rate_limiter.admit(key))
            .await?
            .map_err(|e| AuthError::Internal {
                message: format!("Failed to check rate limit: {}", e),
            })?;

        if !admitted {
            warn!(
                key = %key,
                event = "rate_limit_exceeded",
                "OTP issuance denied by rate limiter"
            );
            return Err(AuthError::RateLimited);
        }

        // Step 2: Generate a fresh code
        let code = self.generator.generate().map_err(|e| AuthError::Internal {
            message: format!("Failed to generate OTP code: {}", e),
        })?;

        // Step 3: Store it under the key, replacing any previous code
        self.with_deadline(self.otp_store.save(key, &code)).await??;

        // Step 4: Hand the code to the delivery channel
        match self.with_deadline(self.delivery.deliver(key, &code)).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => warn!(
                key = %key,
                error = %e,
                event = "otp_delivery_failed",
                "Delivery channel reported failure"
            ),
            Err(_) => warn!(
                key = %key,
                event = "otp_delivery_timeout",
                "Delivery channel missed its deadline"
            ),
        }

        info!(key = %key, event = "otp_issued", "Issued OTP code");
        Ok(())
    }

    /// Verify an OTP code and log the key's account in
    ///
    /// This method:
    /// 1. Atomically consumes the stored code when it matches
    /// 2. Resolves the account, registering it on first login
    /// 3. Issues a session token for the account
    ///
    /// A matching code is consumed exactly once; a wrong guess leaves
    /// the stored code in place so the legitimate code still works.
    ///
    /// # Arguments
    ///
    /// * `key` - The key the code was issued for
    /// * `code` - The code presented by the client
    ///
    /// # Returns
    ///
    /// * `Ok(AuthResponse)` - Session token plus a first-login flag
    /// * `Err(AuthError::OtpNotFound)` - No live code for the key
    /// * `Err(AuthError::InvalidOtp)` - Live code present but the guess was wrong
    /// * `Err(AuthError::Timeout)` - A collaborator missed its deadline
    pub async fn verify_and_login(&self, key: &str, code: &str) -> AuthResult<AuthResponse> {
        // Step 1: Atomically consume the stored code on a match
        let matched = self
            .with_deadline(self.otp_store.find_and_consume(key, code))
            .await??;

        if !matched {
            warn!(key = %key, event = "otp_mismatch", "Rejected wrong OTP code");
            return Err(AuthError::InvalidOtp);
        }

        // Step 2: Resolve the account, registering on first login
        let (user, is_new) = self
            .with_deadline(self.identity.resolve_or_create(key))
            .await??;

        // Step 3: Issue the session token
        let token = self
            .token_issuer
            .create_token(user.id)
            .map_err(|e| AuthError::Internal {
                message: format!("Failed to issue session token: {}", e),
            })?;

        info!(
            user_id = user.id,
            is_new,
            event = "login_succeeded",
            "Completed OTP login"
        );

        Ok(AuthResponse::new(token, is_new))
    }

    /// Fetch a single account by id
    ///
    /// # Returns
    ///
    /// * `Ok(User)` - The account
    /// * `Err(AuthError::UserNotFound)` - No account with that id
    pub async fn get_user(&self, user_id: i64) -> AuthResult<User> {
        self.with_deadline(self.identity.get_user(user_id)).await?
    }

    /// List accounts page by page, optionally filtered by phone substring
    pub async fn list_users(
        &self,
        pagination: Pagination,
        search: Option<String>,
    ) -> AuthResult<PaginatedResponse<User>> {
        self.with_deadline(self.identity.list_users(pagination, search))
            .await?
    }

    /// Run a collaborator call under the configured deadline
    async fn with_deadline<F: Future>(&self, fut: F) -> Result<F::Output, AuthError> {
        timeout(self.config.io_timeout(), fut)
            .await
            .map_err(|_| AuthError::Timeout)
    }
}
