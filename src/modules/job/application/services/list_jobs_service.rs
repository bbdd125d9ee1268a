use async_trait::async_trait;

use crate::job::application::domain::entities::Job;
use crate::job::application::ports::incoming::use_cases::{ListJobsError, ListJobsUseCase};
use crate::job::application::ports::outgoing::JobQuery;

pub struct ListJobsService<Q>
where
    Q: JobQuery,
{
    query: Q,
}

impl<Q> ListJobsService<Q>
where
    Q: JobQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListJobsUseCase for ListJobsService<Q>
where
    Q: JobQuery + Send + Sync,
{
    async fn execute(&self, category: Option<String>) -> Result<Vec<Job>, ListJobsError> {
        let category = category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty());

        self.query
            .list(category)
            .await
            .map_err(|e| ListJobsError::RepositoryError(e.to_string()))
    }
}
