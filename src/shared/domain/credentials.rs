use email_address::EmailAddress;

use super::file_policy::{FilePolicy, FilePolicyError};
use super::stored_file::IncomingFile;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CredentialError {
    #[error("A credential file is required")]
    FileRequired,

    #[error("{0}")]
    InvalidFile(#[from] FilePolicyError),

    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Password cannot be empty")]
    EmptyPassword,
}

/// Raw account fields plus the identity document, as submitted.
#[derive(Debug, Clone)]
pub struct CredentialSubmission {
    pub name: String,
    pub email: String,
    pub password: String,
    pub file: Option<IncomingFile>,
}

/// A submission that passed every intake rule.
#[derive(Debug, Clone)]
pub struct ValidCredentials {
    pub name: String,
    pub email: String,
    pub password: String,
    pub file: IncomingFile,
}

impl CredentialSubmission {
    pub fn validate(self, policy: &FilePolicy) -> Result<ValidCredentials, CredentialError> {
        let file = self.file.ok_or(CredentialError::FileRequired)?;
        let name = normalize_name(&self.name)?;
        let email = normalize_email(&self.email)?;
        let password = require_password(self.password)?;
        let file = policy.validate(file)?;

        Ok(ValidCredentials {
            name,
            email,
            password,
            file,
        })
    }
}

pub fn normalize_name(name: &str) -> Result<String, CredentialError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CredentialError::EmptyName);
    }
    Ok(name.to_string())
}

/// Trimmed, lower-cased and syntactically valid.
pub fn normalize_email(email: &str) -> Result<String, CredentialError> {
    let email = email.trim();
    if email.is_empty() || !EmailAddress::is_valid(email) {
        return Err(CredentialError::InvalidEmail);
    }
    Ok(email.to_lowercase())
}

pub fn require_password(password: String) -> Result<String, CredentialError> {
    if password.trim().is_empty() {
        return Err(CredentialError::EmptyPassword);
    }
    Ok(password)
}
