use async_trait::async_trait;

use crate::job::application::domain::categories::{merge_counts, CategoryStat};
use crate::job::application::ports::incoming::use_cases::{
    CategoryStatsError, CategoryStatsUseCase,
};
use crate::job::application::ports::outgoing::JobQuery;

pub struct CategoryStatsService<Q>
where
    Q: JobQuery,
{
    query: Q,
}

impl<Q> CategoryStatsService<Q>
where
    Q: JobQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> CategoryStatsUseCase for CategoryStatsService<Q>
where
    Q: JobQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<CategoryStat>, CategoryStatsError> {
        let counts = self
            .query
            .count_by_category()
            .await
            .map_err(|e| CategoryStatsError::RepositoryError(e.to_string()))?;

        Ok(merge_counts(
            counts.into_iter().map(|c| (c.category, c.count)),
        ))
    }
}
