use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::domain::{ApprovalStatus, FileMetadata, StoredFile};

/// A request for an administrator account, held until someone reviews it.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminRegistration {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    /// Role the materialized user receives.
    pub is_admin: bool,
    pub credential: StoredFile,
    pub status: ApprovalStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationView {
    pub id: Uuid,
    #[schema(example = "Budi Santoso")]
    pub name: String,
    #[schema(example = "budi@city.gov")]
    pub email: String,
    pub is_admin: bool,
    pub status: ApprovalStatus,
    pub credential: FileMetadata,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&AdminRegistration> for RegistrationView {
    fn from(reg: &AdminRegistration) -> Self {
        Self {
            id: reg.id,
            name: reg.name.clone(),
            email: reg.email.clone(),
            is_admin: reg.is_admin,
            status: reg.status,
            credential: reg.credential.metadata(),
            created_at: reg.created_at,
            updated_at: reg.updated_at,
        }
    }
}

impl From<AdminRegistration> for RegistrationView {
    fn from(reg: AdminRegistration) -> Self {
        Self::from(&reg)
    }
}
