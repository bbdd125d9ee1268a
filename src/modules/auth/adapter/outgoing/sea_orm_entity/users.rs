use sea_orm::entity::prelude::*;

use crate::auth::application::domain::entities::{User, UserId};
use crate::shared::domain::{ApprovalStatus, StoredFile};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub name: String,

    #[sea_orm(column_type = "Text", unique)]
    pub email: String,

    #[sea_orm(column_type = "Text")]
    pub password_hash: String,

    pub is_admin: bool,
    pub is_verified: bool,
    pub status: ApprovalStatus,

    #[sea_orm(column_type = "Text", nullable)]
    pub credential_filename: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub credential_content_type: Option<String>,
    #[sea_orm(nullable)]
    pub credential_data: Option<Vec<u8>>,
    #[sea_orm(nullable)]
    pub credential_uploaded_at: Option<DateTimeWithTimeZone>,

    #[sea_orm(column_type = "Text", nullable)]
    pub picture_filename: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub picture_content_type: Option<String>,
    #[sea_orm(nullable)]
    pub picture_data: Option<Vec<u8>>,
    #[sea_orm(nullable)]
    pub picture_uploaded_at: Option<DateTimeWithTimeZone>,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Model {
    pub fn into_domain(self) -> User {
        User {
            id: UserId::from(self.id),
            name: self.name,
            email: self.email,
            password_hash: self.password_hash,
            is_admin: self.is_admin,
            is_verified: self.is_verified,
            status: self.status,
            credential: StoredFile::from_columns(
                self.credential_filename,
                self.credential_content_type,
                self.credential_data,
                self.credential_uploaded_at,
            ),
            profile_picture: StoredFile::from_columns(
                self.picture_filename,
                self.picture_content_type,
                self.picture_data,
                self.picture_uploaded_at,
            ),
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

        if let sea_orm::ActiveValue::Set(email) = &self.email {
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
