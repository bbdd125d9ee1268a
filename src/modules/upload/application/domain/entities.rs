use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::shared::domain::{ApprovalStatus, FileMetadata, StoredFile};

/// A document uploaded on its own, optionally tied to a user.
#[derive(Debug, Clone, PartialEq)]
pub struct Upload {
    pub id: Uuid,
    pub file: StoredFile,
    pub user_id: Option<UserId>,
    pub status: ApprovalStatus,
    pub is_verified: bool,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadView {
    pub id: Uuid,
    #[serde(flatten)]
    pub file: FileMetadata,
    pub user_id: Option<Uuid>,
    pub status: ApprovalStatus,
    pub is_verified: bool,
}

impl From<&Upload> for UploadView {
    fn from(upload: &Upload) -> Self {
        Self {
            id: upload.id,
            file: upload.file.metadata(),
            user_id: upload.user_id.map(|id| id.value()),
            status: upload.status,
            is_verified: upload.is_verified,
        }
    }
}

impl From<Upload> for UploadView {
    fn from(upload: Upload) -> Self {
        Self::from(&upload)
    }
}
