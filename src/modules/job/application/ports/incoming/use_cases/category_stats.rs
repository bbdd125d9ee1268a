use async_trait::async_trait;

use crate::job::application::domain::categories::CategoryStat;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CategoryStatsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CategoryStatsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<CategoryStat>, CategoryStatsError>;
}
