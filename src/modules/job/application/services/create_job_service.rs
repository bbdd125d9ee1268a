use async_trait::async_trait;

use crate::job::application::domain::entities::{Job, JobDraft};
use crate::job::application::ports::incoming::use_cases::{CreateJobError, CreateJobUseCase};
use crate::job::application::ports::outgoing::JobRepository;

pub struct CreateJobService<R>
where
    R: JobRepository,
{
    repository: R,
}

impl<R> CreateJobService<R>
where
    R: JobRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateJobUseCase for CreateJobService<R>
where
    R: JobRepository + Send + Sync,
{
    async fn execute(&self, draft: JobDraft) -> Result<Job, CreateJobError> {
        let draft = draft.validate()?;

        let job = self
            .repository
            .create(draft)
            .await
            .map_err(|e| CreateJobError::RepositoryError(e.to_string()))?;

        tracing::info!(job_id = %job.id, category = %job.category, "Job created");
        Ok(job)
    }
}
