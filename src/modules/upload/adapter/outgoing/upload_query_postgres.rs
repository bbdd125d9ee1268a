use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::uploads::{
    Column as UploadColumn, Entity as UploadEntity, Model as UploadModel,
};
use crate::shared::domain::ApprovalStatus;
use crate::upload::application::domain::entities::Upload;
use crate::upload::application::ports::outgoing::{UploadQuery, UploadQueryError};

#[derive(Clone, Debug)]
pub struct UploadQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UploadQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UploadQuery for UploadQueryPostgres {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Upload>, UploadQueryError> {
        let row = UploadEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(|e| UploadQueryError::DatabaseError(e.to_string()))?;

        Ok(row.map(UploadModel::into_domain))
    }

    async fn list_pending(&self) -> Result<Vec<Upload>, UploadQueryError> {
        let rows = UploadEntity::find()
            .filter(UploadColumn::Status.eq(ApprovalStatus::Pending))
            .order_by_asc(UploadColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| UploadQueryError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(UploadModel::into_domain).collect())
    }
}
