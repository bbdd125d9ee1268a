use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AdminRegistrations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AdminRegistrations::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AdminRegistrations::Name).text().not_null())
                    .col(ColumnDef::new(AdminRegistrations::Email).text().not_null())
                    .col(
                        ColumnDef::new(AdminRegistrations::PasswordHash)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AdminRegistrations::IsAdmin)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(AdminRegistrations::CredentialFilename)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AdminRegistrations::CredentialContentType)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AdminRegistrations::CredentialData)
                            .binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AdminRegistrations::CredentialUploadedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AdminRegistrations::Status)
                            .string_len(16)
                            .not_null()
                            .default("pending")
                            .check(Expr::col(AdminRegistrations::Status).is_in([
                                "pending", "approved", "rejected",
                            ])),
                    )
                    .col(
                        ColumnDef::new(AdminRegistrations::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(AdminRegistrations::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // One open application per address; rejected rows keep their history.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX idx_admin_registrations_email_pending
                ON admin_registrations (email)
                WHERE status = 'pending';
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_admin_registrations_updated_at
                BEFORE UPDATE ON admin_registrations
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                "DROP TRIGGER IF EXISTS update_admin_registrations_updated_at ON admin_registrations",
            )
            .await?;

        manager
            .drop_table(Table::drop().table(AdminRegistrations::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum AdminRegistrations {
    Table,
    Id,
    Name,
    Email,
    PasswordHash,
    IsAdmin,
    CredentialFilename,
    CredentialContentType,
    CredentialData,
    CredentialUploadedAt,
    Status,
    CreatedAt,
    UpdatedAt,
}
