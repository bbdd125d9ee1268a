use sea_orm::entity::prelude::*;

use crate::auth::application::domain::entities::UserId;
use crate::shared::domain::{ApprovalStatus, StoredFile};
use crate::upload::application::domain::entities::Upload;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "uploads")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub filename: String,

    #[sea_orm(column_type = "Text")]
    pub content_type: String,

    pub data: Vec<u8>,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub uploaded_at: DateTimeWithTimeZone,

    #[sea_orm(nullable)]
    pub user_id: Option<Uuid>,

    pub status: ApprovalStatus,
    pub is_verified: bool,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::auth::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::UserId",
        to = "crate::auth::adapter::outgoing::sea_orm_entity::users::Column::Id",
        on_delete = "SetNull"
    )]
    User,
}

impl Related<crate::auth::adapter::outgoing::sea_orm_entity::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_domain(self) -> Upload {
        Upload {
            id: self.id,
            file: StoredFile {
                filename: self.filename,
                content_type: self.content_type,
                data: self.data,
                uploaded_at: self.uploaded_at.with_timezone(&chrono::Utc),
            },
            user_id: self.user_id.map(UserId::from),
            status: self.status,
            is_verified: self.is_verified,
        }
    }
}
