use async_trait::async_trait;

use crate::job::application::domain::entities::Job;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListJobsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListJobsUseCase: Send + Sync {
    /// A blank category means no filter.
    async fn execute(&self, category: Option<String>) -> Result<Vec<Job>, ListJobsError>;
}
