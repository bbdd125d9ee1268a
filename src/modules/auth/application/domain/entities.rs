use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::domain::{ApprovalStatus, FileMetadata, StoredFile};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<UserId> for Uuid {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Which embedded blob of a user record a write targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserFileSlot {
    Credential,
    ProfilePicture,
}

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub is_admin: bool,
    pub is_verified: bool,
    pub status: ApprovalStatus,
    pub credential: Option<StoredFile>,
    pub profile_picture: Option<StoredFile>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn file(&self, slot: UserFileSlot) -> Option<&StoredFile> {
        match slot {
            UserFileSlot::Credential => self.credential.as_ref(),
            UserFileSlot::ProfilePicture => self.profile_picture.as_ref(),
        }
    }
}

/// Public shape of a user. Never carries the password hash or file bytes.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub id: Uuid,
    #[schema(example = "Siti Rahma")]
    pub name: String,
    #[schema(example = "siti@example.com")]
    pub email: String,
    pub is_admin: bool,
    pub is_verified: bool,
    pub status: ApprovalStatus,
    pub credential: Option<FileMetadata>,
    pub profile_picture: Option<FileMetadata>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.value(),
            name: user.name.clone(),
            email: user.email.clone(),
            is_admin: user.is_admin,
            is_verified: user.is_verified,
            status: user.status,
            credential: user.credential.as_ref().map(StoredFile::metadata),
            profile_picture: user.profile_picture.as_ref().map(StoredFile::metadata),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}
