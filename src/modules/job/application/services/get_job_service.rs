use async_trait::async_trait;
use uuid::Uuid;

use crate::job::application::domain::entities::Job;
use crate::job::application::ports::incoming::use_cases::{GetJobError, GetJobUseCase};
use crate::job::application::ports::outgoing::JobQuery;

pub struct GetJobService<Q>
where
    Q: JobQuery,
{
    query: Q,
}

impl<Q> GetJobService<Q>
where
    Q: JobQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetJobUseCase for GetJobService<Q>
where
    Q: JobQuery + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<Job, GetJobError> {
        self.query
            .find_by_id(id)
            .await
            .map_err(|e| GetJobError::RepositoryError(e.to_string()))?
            .ok_or(GetJobError::NotFound)
    }
}
