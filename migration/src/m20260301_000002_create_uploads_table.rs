use sea_orm_migration::prelude::*;

use crate::m20260301_000001_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Uploads::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Uploads::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Uploads::Filename).text().not_null())
                    .col(ColumnDef::new(Uploads::ContentType).text().not_null())
                    .col(ColumnDef::new(Uploads::Data).binary().not_null())
                    .col(
                        ColumnDef::new(Uploads::UploadedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Uploads::UserId).uuid().null())
                    .col(
                        ColumnDef::new(Uploads::Status)
                            .string_len(16)
                            .not_null()
                            .default("pending")
                            .check(Expr::col(Uploads::Status).is_in([
                                "pending", "approved", "rejected",
                            ])),
                    )
                    .col(
                        ColumnDef::new(Uploads::IsVerified)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Uploads::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_uploads_user_id")
                            .from(Uploads::Table, Uploads::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_uploads_user_id")
                    .table(Uploads::Table)
                    .col(Uploads::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_uploads_pending_created_at
                ON uploads (created_at ASC)
                WHERE status = 'pending';
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Uploads::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Uploads {
    Table,
    Id,
    Filename,
    ContentType,
    Data,
    UploadedAt,
    UserId,
    Status,
    IsVerified,
    CreatedAt,
}
