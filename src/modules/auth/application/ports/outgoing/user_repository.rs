use async_trait::async_trait;

use crate::auth::application::domain::entities::{User, UserFileSlot, UserId};
use crate::shared::domain::{ApprovalStatus, StoredFile};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("User not found")]
    NotFound,

    #[error("Email already exists")]
    EmailAlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub is_admin: bool,
    pub is_verified: bool,
    pub status: ApprovalStatus,
    pub credential: Option<StoredFile>,
}

/// Partial update. `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub status: Option<ApprovalStatus>,
    pub is_verified: Option<bool>,
}

impl UserPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.status.is_none()
            && self.is_verified.is_none()
    }
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, user: NewUser) -> Result<User, UserRepositoryError>;

    async fn patch_user(
        &self,
        user_id: UserId,
        patch: UserPatch,
    ) -> Result<User, UserRepositoryError>;

    async fn set_file(
        &self,
        user_id: UserId,
        slot: UserFileSlot,
        file: StoredFile,
    ) -> Result<User, UserRepositoryError>;
}
