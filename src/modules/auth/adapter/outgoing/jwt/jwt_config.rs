use std::env;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JwtConfigError {
    #[error("JWT_SECRET must be set")]
    MissingSecret,

    #[error("JWT_SECRET must be at least 32 characters long for HS256")]
    SecretTooShort,

    #[error("Invalid {0} value")]
    InvalidNumber(&'static str),

    #[error("JWT_ACCESS_EXPIRY must be between 1 and 86400 seconds (24 hours)")]
    ExpiryOutOfRange,
}

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub access_token_expiry: i64, // seconds
}

impl JwtConfig {
    const MIN_SECRET_LEN: usize = 32;
    const DEFAULT_ACCESS_EXPIRY: i64 = 1800;
    const DEFAULT_ISSUER: &'static str = "job-portal";

    fn parse_expiry(key: &'static str, default: i64) -> Result<i64, JwtConfigError> {
        match env::var(key) {
            Ok(v) => v
                .trim()
                .parse::<i64>()
                .map_err(|_| JwtConfigError::InvalidNumber(key)),
            Err(_) => Ok(default),
        }
    }

    /// Env vars: `JWT_SECRET` (required), `JWT_ACCESS_EXPIRY`, `JWT_ISSUER`.
    pub fn from_env() -> Result<Self, JwtConfigError> {
        let secret_key = env::var("JWT_SECRET").map_err(|_| JwtConfigError::MissingSecret)?;
        let access_token_expiry =
            Self::parse_expiry("JWT_ACCESS_EXPIRY", Self::DEFAULT_ACCESS_EXPIRY)?;
        let issuer = env::var("JWT_ISSUER").unwrap_or_else(|_| Self::DEFAULT_ISSUER.to_string());

        Self::new(secret_key, issuer, access_token_expiry)
    }

    pub fn new(
        secret_key: String,
        issuer: String,
        access_token_expiry: i64,
    ) -> Result<Self, JwtConfigError> {
        if secret_key.len() < Self::MIN_SECRET_LEN {
            return Err(JwtConfigError::SecretTooShort);
        }
        if access_token_expiry <= 0 || access_token_expiry > 86400 {
            return Err(JwtConfigError::ExpiryOutOfRange);
        }

        Ok(Self {
            secret_key,
            issuer,
            access_token_expiry,
        })
    }
}
