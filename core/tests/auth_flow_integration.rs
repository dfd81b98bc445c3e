//! Integration tests for the complete OTP login flow

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::Duration;

    use pa_core::clock::ManualClock;
    use pa_core::errors::{AuthError, TokenError};
    use pa_core::repositories::user::MockUserRepository;
    use pa_core::services::auth::{AuthService, AuthServiceConfig, ConsoleDelivery};
    use pa_core::services::otp::{MemoryOtpStore, OtpGenerator, OtpStore};
    use pa_core::services::rate_limit::SlidingWindowRateLimiter;
    use pa_core::services::token::TokenIssuer;
    use pa_shared::config::{OtpConfig, RateLimitConfig, TokenConfig};
    use pa_shared::types::Pagination;

    const PHONE: &str = "+989123456789";
    const SECRET: &str = "integration-test-secret-0123456789abcd";

    type FlowService =
        AuthService<MemoryOtpStore, SlidingWindowRateLimiter, MockUserRepository, ConsoleDelivery>;

    struct LoginStack {
        service: FlowService,
        store: Arc<MemoryOtpStore>,
        issuer: Arc<TokenIssuer>,
        clock: Arc<ManualClock>,
    }

    fn login_stack() -> LoginStack {
        let clock = Arc::new(ManualClock::starting_now());
        let store = Arc::new(MemoryOtpStore::new(&OtpConfig::default(), clock.clone()));
        let issuer =
            Arc::new(TokenIssuer::new(&TokenConfig::new(SECRET), clock.clone()).unwrap());

        let service = AuthService::new(
            store.clone(),
            Arc::new(SlidingWindowRateLimiter::new(
                &RateLimitConfig::default(),
                clock.clone(),
            )),
            Arc::new(MockUserRepository::new()),
            Arc::new(ConsoleDelivery),
            issuer.clone(),
            OtpGenerator::new(&OtpConfig::default()).unwrap(),
            clock.clone(),
            AuthServiceConfig::default(),
        );

        LoginStack {
            service,
            store,
            issuer,
            clock,
        }
    }

    /// Issue a code and read it back the way a delivery channel would see it.
    async fn issued_code(stack: &LoginStack, phone: &str) -> String {
        stack.service.issue_otp(phone).await.unwrap();
        stack.store.find(phone).await.unwrap()
    }

    #[tokio::test]
    async fn test_full_login_flow_for_a_new_phone() {
        let stack = login_stack();
        let code = issued_code(&stack, PHONE).await;

        assert_eq!(code.len(), 6);
        assert!(code.chars().all(|c| c.is_ascii_digit()));

        // A wrong guess is rejected and does not burn the code.
        let wrong = if code == "000000" { "000001" } else { "000000" };
        let rejected = stack.service.verify_and_login(PHONE, wrong).await;
        assert!(matches!(rejected, Err(AuthError::InvalidOtp)));

        let first = stack.service.verify_and_login(PHONE, &code).await.unwrap();
        assert!(first.is_new);
        let first_id = stack.issuer.verify_token(&first.token).unwrap().user_id;

        // A later login with a fresh code resolves to the same account.
        let code = issued_code(&stack, PHONE).await;
        let second = stack.service.verify_and_login(PHONE, &code).await.unwrap();
        assert!(!second.is_new);
        let second_id = stack.issuer.verify_token(&second.token).unwrap().user_id;

        assert_eq!(first_id, second_id);
    }

    #[tokio::test]
    async fn test_replayed_code_is_rejected() {
        let stack = login_stack();
        let code = issued_code(&stack, PHONE).await;

        stack.service.verify_and_login(PHONE, &code).await.unwrap();

        let replay = stack.service.verify_and_login(PHONE, &code).await;
        assert!(matches!(replay, Err(AuthError::OtpNotFound)));
    }

    #[tokio::test]
    async fn test_expired_code_behaves_like_never_issued() {
        let stack = login_stack();
        let code = issued_code(&stack, PHONE).await;

        stack.clock.advance(Duration::seconds(121));

        let expired = stack.service.verify_and_login(PHONE, &code).await;
        let never_issued = stack.service.verify_and_login("+989120000000", &code).await;

        assert!(matches!(expired, Err(AuthError::OtpNotFound)));
        assert!(matches!(never_issued, Err(AuthError::OtpNotFound)));
    }

    #[tokio::test]
    async fn test_issuance_is_throttled_per_key() {
        let stack = login_stack();

        for _ in 0..3 {
            stack.service.issue_otp(PHONE).await.unwrap();
        }

        let denied = stack.service.issue_otp(PHONE).await;
        assert!(matches!(denied, Err(AuthError::RateLimited)));

        // Another key is unaffected, and the window eventually frees up.
        stack.service.issue_otp("+989120000000").await.unwrap();
        stack.clock.advance(Duration::seconds(60));
        assert!(stack.service.issue_otp(PHONE).await.is_ok());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_logins_admit_exactly_one() {
        let stack = login_stack();
        let code = issued_code(&stack, PHONE).await;
        let service = Arc::new(stack.service);

        let mut handles = Vec::new();
        for _ in 0..10 {
            let service = service.clone();
            let code = code.clone();
            handles.push(tokio::spawn(async move {
                service.verify_and_login(PHONE, &code).await
            }));
        }

        let mut logins = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(response) => {
                    assert!(response.is_new);
                    logins += 1;
                }
                Err(AuthError::OtpNotFound) => {}
                Err(other) => panic!("unexpected login error: {:?}", other),
            }
        }
        assert_eq!(logins, 1);

        // Exactly one account was registered by the race.
        let page = service.list_users(Pagination::default(), None).await.unwrap();
        assert_eq!(page.total_records, 1);
    }

    #[tokio::test]
    async fn test_tokens_bind_identity_and_lifetime() {
        let stack = login_stack();
        let code = issued_code(&stack, PHONE).await;
        let response = stack.service.verify_and_login(PHONE, &code).await.unwrap();

        let claims = stack.issuer.verify_token(&response.token).unwrap();
        let user = stack.service.get_user(claims.user_id).await.unwrap();
        assert_eq!(user.phone_number, PHONE);

        stack.clock.advance(Duration::seconds(901));
        assert_eq!(
            stack.issuer.verify_token(&response.token),
            Err(TokenError::Expired)
        );
    }

    #[tokio::test]
    async fn test_listing_reflects_registered_accounts() {
        let stack = login_stack();

        for phone in ["+989121111111", "+989122222222"] {
            let code = issued_code(&stack, phone).await;
            stack.service.verify_and_login(phone, &code).await.unwrap();
        }

        let page = stack
            .service
            .list_users(Pagination::default(), None)
            .await
            .unwrap();
        assert_eq!(page.total_records, 2);
        assert_eq!(page.total_pages, 1);

        let filtered = stack
            .service
            .list_users(Pagination::default(), Some("2222".to_string()))
            .await
            .unwrap();
        assert_eq!(filtered.total_records, 1);
    }
}
