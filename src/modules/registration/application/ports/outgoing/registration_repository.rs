use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::registration::application::domain::entities::AdminRegistration;
use crate::shared::domain::{ApprovalStatus, StoredFile};

#[derive(Debug, Clone)]
pub struct NewRegistration {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub is_admin: bool,
    pub credential: StoredFile,
}

/// Outcome of approving a registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Materialization {
    pub user_id: UserId,
    /// False when a user with the same email already existed and was kept.
    pub created: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationRepositoryError {
    #[error("Registration not found")]
    NotFound,

    #[error("A pending registration for this email already exists")]
    EmailAlreadyPending,

    /// A user with the same email appeared while the approval was running.
    #[error("A user with this email already exists")]
    UserEmailTaken,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait RegistrationRepository: Send + Sync {
    async fn create(
        &self,
        registration: NewRegistration,
    ) -> Result<AdminRegistration, RegistrationRepositoryError>;

    /// Changes the status only. Never deletes the row.
    async fn set_status(
        &self,
        id: Uuid,
        status: ApprovalStatus,
    ) -> Result<AdminRegistration, RegistrationRepositoryError>;

    /// Atomically turns the registration into a user and removes it.
    async fn approve_and_materialize(
        &self,
        id: Uuid,
    ) -> Result<Materialization, RegistrationRepositoryError>;
}
