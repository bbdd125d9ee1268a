pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_users_table;
mod m20260301_000002_create_uploads_table;
mod m20260301_000003_create_admin_registrations_table;
mod m20260301_000004_create_jobs_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_users_table::Migration),
            Box::new(m20260301_000002_create_uploads_table::Migration),
            Box::new(m20260301_000003_create_admin_registrations_table::Migration),
            Box::new(m20260301_000004_create_jobs_table::Migration),
        ]
    }
}
