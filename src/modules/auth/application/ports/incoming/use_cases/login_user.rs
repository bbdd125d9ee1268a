use async_trait::async_trait;

use crate::auth::application::domain::entities::User;
use crate::shared::domain::credentials::{normalize_email, require_password, CredentialError};

/// Login credentials that already passed field validation.
#[derive(Debug, Clone)]
pub struct LoginRequest {
    email: String,
    password: String,
}

impl LoginRequest {
    pub fn new(email: String, password: String) -> Result<Self, CredentialError> {
        let email = normalize_email(&email)?;
        let password = require_password(password)?;
        Ok(Self { email, password })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

/// Which door the caller knocked on. Citizens and administrators never share one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginAudience {
    Applicant,
    Administrator,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Account has not been approved")]
    AccountNotApproved,

    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

#[derive(Debug, Clone)]
pub struct LoginOutput {
    pub access_token: String,
    pub user: User,
}

#[async_trait]
pub trait LoginUserUseCase: Send + Sync {
    async fn execute(
        &self,
        request: LoginRequest,
        audience: LoginAudience,
    ) -> Result<LoginOutput, LoginError>;
}
