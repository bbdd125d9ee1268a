use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::shared::domain::ApprovalStatus;
use crate::upload::application::domain::entities::Upload;
use crate::upload::application::ports::incoming::use_cases::{
    ReviewUploadError, ReviewUploadUseCase,
};
use crate::upload::application::ports::outgoing::{UploadRepository, UploadRepositoryError};

pub struct ReviewUploadService<R>
where
    R: UploadRepository,
{
    repository: R,
}

impl<R> ReviewUploadService<R>
where
    R: UploadRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ReviewUploadUseCase for ReviewUploadService<R>
where
    R: UploadRepository + Send + Sync,
{
    async fn execute(
        &self,
        id: Uuid,
        status: &str,
        owner: Option<UserId>,
    ) -> Result<Upload, ReviewUploadError> {
        let status = status
            .parse::<ApprovalStatus>()
            .map_err(|e| ReviewUploadError::InvalidStatus(e.0))?;

        let upload = self
            .repository
            .review(id, status, owner)
            .await
            .map_err(|e| match e {
                UploadRepositoryError::UploadNotFound => ReviewUploadError::UploadNotFound,
                UploadRepositoryError::UserNotFound => ReviewUploadError::UserNotFound,
                UploadRepositoryError::DatabaseError(msg) => ReviewUploadError::RepositoryError(msg),
            })?;

        tracing::info!(
            upload_id = %id,
            %status,
            owner = ?upload.user_id.map(|u| u.value()),
            "Upload reviewed"
        );
        Ok(upload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::fixtures::{sample_upload, sample_user};
    use crate::tests::support::in_memory::{InMemoryUploads, InMemoryUsers};

    #[tokio::test]
    async fn test_approve_with_owner_verifies_both() {
        let user = sample_user(false, ApprovalStatus::Pending);
        let users = InMemoryUsers::with(vec![user.clone()]);
        let upload = sample_upload(None);
        let store = InMemoryUploads::with(vec![upload.clone()]).owned_by(users.clone());

        let reviewed = ReviewUploadService::new(store)
            .execute(upload.id, "approved", Some(user.id))
            .await
            .unwrap();

        assert_eq!(reviewed.status, ApprovalStatus::Approved);
        assert!(reviewed.is_verified);
        assert_eq!(reviewed.user_id, Some(user.id));
        assert!(users.all()[0].is_verified);
    }

    #[tokio::test]
    async fn test_reject_clears_owner_flag() {
        let mut user = sample_user(false, ApprovalStatus::Approved);
        user.is_verified = true;
        let users = InMemoryUsers::with(vec![user.clone()]);
        let upload = sample_upload(Some(user.id));
        let store = InMemoryUploads::with(vec![upload.clone()]).owned_by(users.clone());

        let reviewed = ReviewUploadService::new(store)
            .execute(upload.id, "rejected", None)
            .await
            .unwrap();

        assert_eq!(reviewed.status, ApprovalStatus::Rejected);
        assert!(!reviewed.is_verified);
        assert!(!users.all()[0].is_verified);
    }

    #[tokio::test]
    async fn test_missing_user_leaves_upload_untouched() {
        let upload = sample_upload(None);
        let store = InMemoryUploads::with(vec![upload.clone()]);

        let err = ReviewUploadService::new(store.clone())
            .execute(upload.id, "approved", Some(UserId::from(Uuid::new_v4())))
            .await
            .unwrap_err();

        assert!(matches!(err, ReviewUploadError::UserNotFound));
        assert_eq!(store.all()[0], upload);
    }

    #[tokio::test]
    async fn test_invalid_status_checked_first() {
        let err = ReviewUploadService::new(InMemoryUploads::broken("must not be called"))
            .execute(Uuid::new_v4(), "Approved", None)
            .await
            .unwrap_err();

        assert!(matches!(err, ReviewUploadError::InvalidStatus(s) if s == "Approved"));
    }

    #[tokio::test]
    async fn test_unknown_upload() {
        let err = ReviewUploadService::new(InMemoryUploads::default())
            .execute(Uuid::new_v4(), "approved", None)
            .await
            .unwrap_err();

        assert!(matches!(err, ReviewUploadError::UploadNotFound));
    }
}
