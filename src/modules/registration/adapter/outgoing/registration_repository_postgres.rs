use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait,
    QueryFilter, QuerySelect, Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::admin_registrations::{
    ActiveModel as RegistrationActiveModel, Entity as RegistrationEntity,
};
use crate::auth::adapter::outgoing::sea_orm_entity::users::{
    Column as UserColumn, Entity as UserEntity,
};
use crate::auth::adapter::outgoing::user_repository_postgres::new_user_active_model;
use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::NewUser;
use crate::registration::application::domain::entities::AdminRegistration;
use crate::registration::application::ports::outgoing::{
    Materialization, NewRegistration, RegistrationRepository, RegistrationRepositoryError,
};
use crate::shared::domain::ApprovalStatus;
use crate::shared::persistence::is_unique_violation;

#[derive(Clone, Debug)]
pub struct RegistrationRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl RegistrationRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> RegistrationRepositoryError {
        RegistrationRepositoryError::DatabaseError(e.to_string())
    }

    /// Body of the approval transaction. The caller commits or rolls back.
    async fn materialize(
        txn: &DatabaseTransaction,
        id: Uuid,
    ) -> Result<Materialization, RegistrationRepositoryError> {
        // A concurrent approval blocks here and then finds the row gone.
        let registration = RegistrationEntity::find_by_id(id)
            .lock_exclusive()
            .one(txn)
            .await
            .map_err(Self::map_db_err)?
            .ok_or(RegistrationRepositoryError::NotFound)?;

        let existing = UserEntity::find()
            .filter(UserColumn::Email.eq(registration.email.as_str()))
            .one(txn)
            .await
            .map_err(Self::map_db_err)?;

        let outcome = match existing {
            Some(user) => Materialization {
                user_id: UserId::from(user.id),
                created: false,
            },
            None => {
                let reg = registration.into_domain();
                let inserted = new_user_active_model(NewUser {
                    name: reg.name,
                    email: reg.email,
                    password_hash: reg.password_hash,
                    is_admin: reg.is_admin,
                    is_verified: true,
                    status: ApprovalStatus::Approved,
                    credential: Some(reg.credential),
                })
                .insert(txn)
                .await
                .map_err(|e| {
                    if is_unique_violation(&e) {
                        RegistrationRepositoryError::UserEmailTaken
                    } else {
                        Self::map_db_err(e)
                    }
                })?;

                Materialization {
                    user_id: UserId::from(inserted.id),
                    created: true,
                }
            }
        };

        RegistrationEntity::delete_by_id(id)
            .exec(txn)
            .await
            .map_err(Self::map_db_err)?;

        Ok(outcome)
    }
}

#[async_trait]
impl RegistrationRepository for RegistrationRepositoryPostgres {
    async fn create(
        &self,
        registration: NewRegistration,
    ) -> Result<AdminRegistration, RegistrationRepositoryError> {
        let file = registration.credential;
        let active = RegistrationActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(registration.name),
            email: Set(registration.email),
            password_hash: Set(registration.password_hash),
            is_admin: Set(registration.is_admin),
            credential_filename: Set(file.filename),
            credential_content_type: Set(file.content_type),
            credential_data: Set(file.data),
            credential_uploaded_at: Set(file.uploaded_at.fixed_offset()),
            status: Set(ApprovalStatus::Pending),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active.insert(&*self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                RegistrationRepositoryError::EmailAlreadyPending
            } else {
                Self::map_db_err(e)
            }
        })?;

        Ok(inserted.into_domain())
    }

    async fn set_status(
        &self,
        id: Uuid,
        status: ApprovalStatus,
    ) -> Result<AdminRegistration, RegistrationRepositoryError> {
        let mut active: RegistrationActiveModel = RegistrationEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?
            .ok_or(RegistrationRepositoryError::NotFound)?
            .into();

        active.status = Set(status);

        let updated = active.update(&*self.db).await.map_err(|e| {
            // Moving a row back to pending can collide with a newer pending submission.
            if is_unique_violation(&e) {
                RegistrationRepositoryError::EmailAlreadyPending
            } else {
                Self::map_db_err(e)
            }
        })?;

        Ok(updated.into_domain())
    }

    async fn approve_and_materialize(
        &self,
        id: Uuid,
    ) -> Result<Materialization, RegistrationRepositoryError> {
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        let outcome = match Self::materialize(&txn, id).await {
            Ok(outcome) => outcome,
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::warn!(
                        registration_id = %id,
                        error = %rollback_err,
                        "Rollback of registration approval failed"
                    );
                }
                return Err(e);
            }
        };

        txn.commit().await.map_err(Self::map_db_err)?;

        tracing::debug!(registration_id = %id, user_id = %outcome.user_id, "Registration materialized");
        Ok(outcome)
    }
}
