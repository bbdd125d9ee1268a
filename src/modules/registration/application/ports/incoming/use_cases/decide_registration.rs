use async_trait::async_trait;
use uuid::Uuid;

use crate::registration::application::domain::entities::AdminRegistration;
use crate::registration::application::ports::outgoing::Materialization;

#[derive(Debug, Clone, PartialEq)]
pub enum RegistrationDecision {
    /// Approved: the registration is gone and a user stands in its place.
    Materialized(Materialization),
    /// Rejected or moved back to pending: the row is kept.
    Updated(AdminRegistration),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum DecideRegistrationError {
    #[error("Invalid status: {0}. Must be one of pending, approved, rejected")]
    InvalidStatus(String),

    #[error("Registration not found")]
    NotFound,

    #[error("A user with this email already exists")]
    EmailAlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DecideRegistrationUseCase: Send + Sync {
    async fn execute(
        &self,
        id: Uuid,
        status: &str,
    ) -> Result<RegistrationDecision, DecideRegistrationError>;
}
