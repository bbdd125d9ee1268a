use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::ports::incoming::use_cases::{
    LoginAudience, LoginError, LoginOutput, LoginRequest, LoginUserUseCase,
};
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider, UserQuery};
use crate::shared::domain::ApprovalStatus;

pub struct LoginUserService<Q>
where
    Q: UserQuery,
{
    user_query: Q,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q> LoginUserService<Q>
where
    Q: UserQuery,
{
    pub fn new(
        user_query: Q,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            user_query,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q> LoginUserUseCase for LoginUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(
        &self,
        request: LoginRequest,
        audience: LoginAudience,
    ) -> Result<LoginOutput, LoginError> {
        let user = self
            .user_query
            .find_by_email(request.email())
            .await
            .map_err(|e| LoginError::QueryError(e.to_string()))?
            .ok_or(LoginError::InvalidCredentials)?;

        let matches = self
            .password_hasher
            .verify_password(request.password(), &user.password_hash)
            .await
            .map_err(|e| LoginError::PasswordVerificationFailed(e.to_string()))?;
        if !matches {
            return Err(LoginError::InvalidCredentials);
        }

        // Wrong door looks the same as a wrong password.
        match audience {
            LoginAudience::Applicant if user.is_admin => {
                return Err(LoginError::InvalidCredentials)
            }
            LoginAudience::Administrator if !user.is_admin => {
                return Err(LoginError::InvalidCredentials)
            }
            LoginAudience::Administrator if user.status != ApprovalStatus::Approved => {
                tracing::warn!(user_id = %user.id, status = %user.status, "Admin login refused");
                return Err(LoginError::AccountNotApproved);
            }
            _ => {}
        }

        let access_token = self
            .token_provider
            .generate_access_token(user.id.value(), user.is_verified, user.is_admin)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        tracing::debug!(user_id = %user.id, ?audience, "Login succeeded");
        Ok(LoginOutput { access_token, user })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::{mock, predicate::*};
    use uuid::Uuid;

    use crate::auth::application::ports::outgoing::{TokenClaims, TokenError};
    use crate::tests::support::fixtures::{sample_user, FakePasswordHasher};
    use crate::tests::support::in_memory::InMemoryUsers;

    mock! {
        pub Tokens {}
        impl TokenProvider for Tokens {
            fn generate_access_token(
                &self,
                user_id: Uuid,
                is_verified: bool,
                is_admin: bool,
            ) -> Result<String, TokenError>;
            fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError>;
        }
    }

    fn request(password: &str) -> LoginRequest {
        LoginRequest::new("siti@example.com".to_string(), password.to_string()).unwrap()
    }

    fn service(users: InMemoryUsers, tokens: MockTokens) -> LoginUserService<InMemoryUsers> {
        LoginUserService::new(users, Arc::new(FakePasswordHasher), Arc::new(tokens))
    }

    #[tokio::test]
    async fn test_applicant_login_issues_token() {
        let user = sample_user(false, ApprovalStatus::Pending);
        let user_id = user.id.value();

        let mut tokens = MockTokens::new();
        tokens
            .expect_generate_access_token()
            .with(eq(user_id), eq(false), eq(false))
            .times(1)
            .returning(|_, _, _| Ok("token-abc".to_string()));

        let svc = service(InMemoryUsers::with(vec![user]), tokens);
        let out = svc
            .execute(request("hunter22"), LoginAudience::Applicant)
            .await
            .unwrap();

        assert_eq!(out.access_token, "token-abc");
        assert_eq!(out.user.id.value(), user_id);
    }

    #[tokio::test]
    async fn test_wrong_password_is_invalid_credentials() {
        let users = InMemoryUsers::with(vec![sample_user(false, ApprovalStatus::Approved)]);
        let svc = service(users, MockTokens::new());

        let err = svc
            .execute(request("wrong"), LoginAudience::Applicant)
            .await
            .unwrap_err();
        assert!(matches!(err, LoginError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_unknown_email_is_invalid_credentials() {
        let svc = service(InMemoryUsers::default(), MockTokens::new());

        let err = svc
            .execute(request("hunter22"), LoginAudience::Applicant)
            .await
            .unwrap_err();
        assert!(matches!(err, LoginError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_admin_cannot_use_applicant_login() {
        let users = InMemoryUsers::with(vec![sample_user(true, ApprovalStatus::Approved)]);
        let svc = service(users, MockTokens::new());

        let err = svc
            .execute(request("hunter22"), LoginAudience::Applicant)
            .await
            .unwrap_err();
        assert!(matches!(err, LoginError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_applicant_cannot_use_admin_login() {
        let users = InMemoryUsers::with(vec![sample_user(false, ApprovalStatus::Approved)]);
        let svc = service(users, MockTokens::new());

        let err = svc
            .execute(request("hunter22"), LoginAudience::Administrator)
            .await
            .unwrap_err();
        assert!(matches!(err, LoginError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_admin_login_requires_approval() {
        let users = InMemoryUsers::with(vec![sample_user(true, ApprovalStatus::Rejected)]);
        let svc = service(users, MockTokens::new());

        let err = svc
            .execute(request("hunter22"), LoginAudience::Administrator)
            .await
            .unwrap_err();
        assert!(matches!(err, LoginError::AccountNotApproved));
    }

    #[tokio::test]
    async fn test_approved_admin_token_carries_admin_flag() {
        let admin = sample_user(true, ApprovalStatus::Approved);

        let mut tokens = MockTokens::new();
        tokens
            .expect_generate_access_token()
            .with(always(), eq(true), eq(true))
            .times(1)
            .returning(|_, _, _| Ok("admin-token".to_string()));

        let svc = service(InMemoryUsers::with(vec![admin]), tokens);
        let out = svc
            .execute(request("hunter22"), LoginAudience::Administrator)
            .await
            .unwrap();
        assert_eq!(out.access_token, "admin-token");
    }

    #[tokio::test]
    async fn test_token_failure_is_reported() {
        let mut tokens = MockTokens::new();
        tokens
            .expect_generate_access_token()
            .returning(|_, _, _| Err(TokenError::EncodingError("boom".to_string())));

        let users = InMemoryUsers::with(vec![sample_user(false, ApprovalStatus::Pending)]);
        let svc = service(users, tokens);

        let err = svc
            .execute(request("hunter22"), LoginAudience::Applicant)
            .await
            .unwrap_err();
        assert!(matches!(err, LoginError::TokenGenerationFailed(msg) if msg.contains("boom")));
    }

    #[tokio::test]
    async fn test_query_failure_is_reported() {
        let svc = service(InMemoryUsers::broken("db down"), MockTokens::new());

        let err = svc
            .execute(request("hunter22"), LoginAudience::Applicant)
            .await
            .unwrap_err();
        assert!(matches!(err, LoginError::QueryError(_)));
    }
}
