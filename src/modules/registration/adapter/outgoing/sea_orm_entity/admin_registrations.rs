use sea_orm::entity::prelude::*;

use crate::registration::application::domain::entities::AdminRegistration;
use crate::shared::domain::{ApprovalStatus, StoredFile};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "admin_registrations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub name: String,

    #[sea_orm(column_type = "Text")]
    pub email: String,

    #[sea_orm(column_type = "Text")]
    pub password_hash: String,

    pub is_admin: bool,

    #[sea_orm(column_type = "Text")]
    pub credential_filename: String,
    #[sea_orm(column_type = "Text")]
    pub credential_content_type: String,
    pub credential_data: Vec<u8>,
    pub credential_uploaded_at: DateTimeWithTimeZone,

    pub status: ApprovalStatus,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Model {
    pub fn into_domain(self) -> AdminRegistration {
        AdminRegistration {
            id: self.id,
            name: self.name,
            email: self.email,
            password_hash: self.password_hash,
            is_admin: self.is_admin,
            credential: StoredFile {
                filename: self.credential_filename,
                content_type: self.credential_content_type,
                data: self.credential_data,
                uploaded_at: self.credential_uploaded_at.with_timezone(&chrono::Utc),
            },
            status: self.status,
            created_at: self.created_at.with_timezone(&chrono::Utc),
            updated_at: self.updated_at.with_timezone(&chrono::Utc),
        }
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        use sea_orm::ActiveValue::Set;

        if let Set(email) = &self.email {
            self.email = Set(email.trim().to_lowercase());
        }

        #[cfg(feature = "no_db_triggers")]
        {
            if !_insert {
                self.updated_at = Set(chrono::Utc::now().into());
            }
        }

        Ok(self)
    }
}
