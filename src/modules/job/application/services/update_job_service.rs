use async_trait::async_trait;
use uuid::Uuid;

use crate::job::application::domain::entities::{Job, JobDraft};
use crate::job::application::ports::incoming::use_cases::{UpdateJobError, UpdateJobUseCase};
use crate::job::application::ports::outgoing::{JobRepository, JobRepositoryError};

pub struct UpdateJobService<R>
where
    R: JobRepository,
{
    repository: R,
}

impl<R> UpdateJobService<R>
where
    R: JobRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateJobUseCase for UpdateJobService<R>
where
    R: JobRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid, draft: JobDraft) -> Result<Job, UpdateJobError> {
        let draft = draft.validate()?;

        self.repository
            .update(id, draft)
            .await
            .map_err(|e| match e {
                JobRepositoryError::NotFound => UpdateJobError::NotFound,
                JobRepositoryError::DatabaseError(msg) => UpdateJobError::RepositoryError(msg),
            })
    }
}
