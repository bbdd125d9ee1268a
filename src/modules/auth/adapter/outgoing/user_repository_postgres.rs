use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Entity as UserEntity, Model as UserModel,
};
use crate::auth::application::domain::entities::{User, UserFileSlot, UserId};
use crate::auth::application::ports::outgoing::{
    NewUser, UserPatch, UserRepository, UserRepositoryError,
};
use crate::shared::domain::StoredFile;
use crate::shared::persistence::is_unique_violation;

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_write_error(e: DbErr) -> UserRepositoryError {
        if is_unique_violation(&e) {
            return UserRepositoryError::EmailAlreadyExists;
        }
        UserRepositoryError::DatabaseError(e.to_string())
    }

    async fn load(&self, user_id: UserId) -> Result<UserModel, UserRepositoryError> {
        UserEntity::find_by_id(user_id.value())
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(UserRepositoryError::NotFound)
    }
}

/// Active model for a fresh row. Also used when an admin registration is materialized.
pub(crate) fn new_user_active_model(user: NewUser) -> UserActiveModel {
    let (filename, content_type, data, uploaded_at) = match user.credential {
        Some(file) => (
            Set(Some(file.filename)),
            Set(Some(file.content_type)),
            Set(Some(file.data)),
            Set(Some(file.uploaded_at.fixed_offset())),
        ),
        None => (Set(None), Set(None), Set(None), Set(None)),
    };

    UserActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(user.name),
        email: Set(user.email),
        password_hash: Set(user.password_hash),
        is_admin: Set(user.is_admin),
        is_verified: Set(user.is_verified),
        status: Set(user.status),
        credential_filename: filename,
        credential_content_type: content_type,
        credential_data: data,
        credential_uploaded_at: uploaded_at,
        picture_filename: Set(None),
        picture_content_type: Set(None),
        picture_data: Set(None),
        picture_uploaded_at: Set(None),
        created_at: NotSet,
        updated_at: NotSet,
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, user: NewUser) -> Result<User, UserRepositoryError> {
        let inserted = new_user_active_model(user)
            .insert(&*self.db)
            .await
            .map_err(Self::map_write_error)?;

        Ok(inserted.into_domain())
    }

    async fn patch_user(
        &self,
        user_id: UserId,
        patch: UserPatch,
    ) -> Result<User, UserRepositoryError> {
        let mut active: UserActiveModel = self.load(user_id).await?.into();

        if let Some(name) = patch.name {
            active.name = Set(name);
        }
        if let Some(email) = patch.email {
            active.email = Set(email);
        }
        if let Some(status) = patch.status {
            active.status = Set(status);
        }
        if let Some(is_verified) = patch.is_verified {
            active.is_verified = Set(is_verified);
        }

        let updated = active
            .update(&*self.db)
            .await
            .map_err(Self::map_write_error)?;

        Ok(updated.into_domain())
    }

    async fn set_file(
        &self,
        user_id: UserId,
        slot: UserFileSlot,
        file: StoredFile,
    ) -> Result<User, UserRepositoryError> {
        let mut active: UserActiveModel = self.load(user_id).await?.into();
        let uploaded_at = Some(file.uploaded_at.fixed_offset());

        match slot {
            UserFileSlot::Credential => {
                active.credential_filename = Set(Some(file.filename));
                active.credential_content_type = Set(Some(file.content_type));
                active.credential_data = Set(Some(file.data));
                active.credential_uploaded_at = Set(uploaded_at);
            }
            UserFileSlot::ProfilePicture => {
                active.picture_filename = Set(Some(file.filename));
                active.picture_content_type = Set(Some(file.content_type));
                active.picture_data = Set(Some(file.data));
                active.picture_uploaded_at = Set(uploaded_at);
            }
        }

        let updated = active
            .update(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        Ok(updated.into_domain())
    }
}
