use async_trait::async_trait;
use uuid::Uuid;

use crate::job::application::ports::incoming::use_cases::{DeleteJobError, DeleteJobUseCase};
use crate::job::application::ports::outgoing::{JobRepository, JobRepositoryError};

pub struct DeleteJobService<R>
where
    R: JobRepository,
{
    repository: R,
}

impl<R> DeleteJobService<R>
where
    R: JobRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteJobUseCase for DeleteJobService<R>
where
    R: JobRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), DeleteJobError> {
        self.repository.delete(id).await.map_err(|e| match e {
            JobRepositoryError::NotFound => DeleteJobError::NotFound,
            JobRepositoryError::DatabaseError(msg) => DeleteJobError::RepositoryError(msg),
        })?;

        tracing::info!(job_id = %id, "Job deleted");
        Ok(())
    }
}
