use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait, QuerySelect,
    Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::uploads::{
    ActiveModel as UploadActiveModel, Entity as UploadEntity, Model as UploadModel,
};
use crate::auth::adapter::outgoing::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Entity as UserEntity,
};
use crate::auth::application::domain::entities::UserId;
use crate::shared::domain::{ApprovalStatus, StoredFile};
use crate::shared::persistence::is_foreign_key_violation;
use crate::upload::application::domain::entities::Upload;
use crate::upload::application::ports::outgoing::{UploadRepository, UploadRepositoryError};

#[derive(Clone, Debug)]
pub struct UploadRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UploadRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> UploadRepositoryError {
        if is_foreign_key_violation(&e) {
            UploadRepositoryError::UserNotFound
        } else {
            UploadRepositoryError::DatabaseError(e.to_string())
        }
    }

    async fn find_upload<C>(conn: &C, id: Uuid) -> Result<UploadModel, UploadRepositoryError>
    where
        C: sea_orm::ConnectionTrait,
    {
        UploadEntity::find_by_id(id)
            .one(conn)
            .await
            .map_err(Self::map_db_err)?
            .ok_or(UploadRepositoryError::UploadNotFound)
    }

    /// Body of the review transaction. The caller commits or rolls back.
    async fn apply_review(
        txn: &DatabaseTransaction,
        id: Uuid,
        status: ApprovalStatus,
        owner: Option<UserId>,
    ) -> Result<UploadModel, UploadRepositoryError> {
        let upload = UploadEntity::find_by_id(id)
            .lock_exclusive()
            .one(txn)
            .await
            .map_err(Self::map_db_err)?
            .ok_or(UploadRepositoryError::UploadNotFound)?;

        let verified = status.grants_verification();
        let owner_id = owner.map(Uuid::from).or(upload.user_id);

        let mut active: UploadActiveModel = upload.into();
        active.user_id = Set(owner_id);
        active.status = Set(status);
        active.is_verified = Set(verified);
        let updated = active.update(txn).await.map_err(Self::map_db_err)?;

        if let Some(user_id) = owner_id {
            let mut user: UserActiveModel = UserEntity::find_by_id(user_id)
                .lock_exclusive()
                .one(txn)
                .await
                .map_err(Self::map_db_err)?
                .ok_or(UploadRepositoryError::UserNotFound)?
                .into();

            user.is_verified = Set(verified);
            user.update(txn).await.map_err(Self::map_db_err)?;
        }

        Ok(updated)
    }
}

#[async_trait]
impl UploadRepository for UploadRepositoryPostgres {
    async fn create(
        &self,
        file: StoredFile,
        owner: Option<UserId>,
    ) -> Result<Upload, UploadRepositoryError> {
        let active = UploadActiveModel {
            id: Set(Uuid::new_v4()),
            filename: Set(file.filename),
            content_type: Set(file.content_type),
            data: Set(file.data),
            uploaded_at: Set(file.uploaded_at.fixed_offset()),
            user_id: Set(owner.map(Uuid::from)),
            status: Set(ApprovalStatus::Pending),
            is_verified: Set(false),
            created_at: NotSet,
        };

        let inserted = active.insert(&*self.db).await.map_err(Self::map_db_err)?;
        Ok(inserted.into_domain())
    }

    async fn review(
        &self,
        id: Uuid,
        status: ApprovalStatus,
        owner: Option<UserId>,
    ) -> Result<Upload, UploadRepositoryError> {
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        let updated = match Self::apply_review(&txn, id, status, owner).await {
            Ok(updated) => updated,
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::warn!(
                        upload_id = %id,
                        error = %rollback_err,
                        "Rollback of upload review failed"
                    );
                }
                return Err(e);
            }
        };

        txn.commit().await.map_err(Self::map_db_err)?;
        Ok(updated.into_domain())
    }

    async fn link_owner(&self, id: Uuid, owner: UserId) -> Result<Upload, UploadRepositoryError> {
        let mut active: UploadActiveModel = Self::find_upload(&*self.db, id).await?.into();
        active.user_id = Set(Some(owner.value()));

        let updated = active.update(&*self.db).await.map_err(Self::map_db_err)?;
        Ok(updated.into_domain())
    }
}
