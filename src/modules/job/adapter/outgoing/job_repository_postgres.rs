use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::jobs::{ActiveModel as JobActiveModel, Entity as JobEntity};
use crate::job::application::domain::entities::{Job, JobDraft};
use crate::job::application::ports::outgoing::{JobRepository, JobRepositoryError};

#[derive(Clone, Debug)]
pub struct JobRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl JobRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> JobRepositoryError {
        JobRepositoryError::DatabaseError(e.to_string())
    }
}

fn apply_draft(active: &mut JobActiveModel, draft: JobDraft) {
    active.title = Set(draft.title);
    active.company = Set(draft.company);
    active.category = Set(draft.category);
    active.location = Set(draft.location);
    active.description = Set(draft.description);
    active.salary = Set(draft.salary);
}

#[async_trait]
impl JobRepository for JobRepositoryPostgres {
    async fn create(&self, draft: JobDraft) -> Result<Job, JobRepositoryError> {
        let active = JobActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(draft.title),
            company: Set(draft.company),
            category: Set(draft.category),
            location: Set(draft.location),
            description: Set(draft.description),
            salary: Set(draft.salary),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active.insert(&*self.db).await.map_err(Self::map_db_err)?;
        Ok(inserted.into_domain())
    }

    async fn update(&self, id: Uuid, draft: JobDraft) -> Result<Job, JobRepositoryError> {
        let mut active: JobActiveModel = JobEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?
            .ok_or(JobRepositoryError::NotFound)?
            .into();
        apply_draft(&mut active, draft);

        let updated = active.update(&*self.db).await.map_err(Self::map_db_err)?;
        Ok(updated.into_domain())
    }

    async fn delete(&self, id: Uuid) -> Result<(), JobRepositoryError> {
        let result = JobEntity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        if result.rows_affected == 0 {
            return Err(JobRepositoryError::NotFound);
        }
        Ok(())
    }
}
