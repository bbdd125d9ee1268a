use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::admin_registrations::{
    Column as RegistrationColumn, Entity as RegistrationEntity, Model as RegistrationModel,
};
use crate::registration::application::domain::entities::AdminRegistration;
use crate::registration::application::ports::outgoing::{
    RegistrationQuery, RegistrationQueryError,
};
use crate::shared::domain::ApprovalStatus;

#[derive(Clone, Debug)]
pub struct RegistrationQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl RegistrationQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn db_error(e: sea_orm::DbErr) -> RegistrationQueryError {
    RegistrationQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl RegistrationQuery for RegistrationQueryPostgres {
    async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<AdminRegistration>, RegistrationQueryError> {
        let row = RegistrationEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(row.map(RegistrationModel::into_domain))
    }

    async fn find_pending_by_email(
        &self,
        email: &str,
    ) -> Result<Option<AdminRegistration>, RegistrationQueryError> {
        let row = RegistrationEntity::find()
            .filter(RegistrationColumn::Email.eq(email))
            .filter(RegistrationColumn::Status.eq(ApprovalStatus::Pending))
            .one(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(row.map(RegistrationModel::into_domain))
    }

    async fn list_pending(&self) -> Result<Vec<AdminRegistration>, RegistrationQueryError> {
        let rows = RegistrationEntity::find()
            .filter(RegistrationColumn::Status.eq(ApprovalStatus::Pending))
            .order_by_asc(RegistrationColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(rows.into_iter().map(RegistrationModel::into_domain).collect())
    }
}
