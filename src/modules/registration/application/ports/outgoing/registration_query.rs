use async_trait::async_trait;
use uuid::Uuid;

use crate::registration::application::domain::entities::AdminRegistration;

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegistrationQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait RegistrationQuery: Send + Sync {
    async fn find_by_id(&self, id: Uuid)
        -> Result<Option<AdminRegistration>, RegistrationQueryError>;

    async fn find_pending_by_email(
        &self,
        email: &str,
    ) -> Result<Option<AdminRegistration>, RegistrationQueryError>;

    /// Pending registrations, oldest first.
    async fn list_pending(&self) -> Result<Vec<AdminRegistration>, RegistrationQueryError>;
}
