use async_trait::async_trait;
use uuid::Uuid;

use crate::job::application::domain::entities::Job;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub category: String,
    pub count: u64,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum JobQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait JobQuery: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Job>, JobQueryError>;

    /// Newest first, optionally restricted to one category.
    async fn list(&self, category: Option<&str>) -> Result<Vec<Job>, JobQueryError>;

    /// One row per category present in the store.
    async fn count_by_category(&self) -> Result<Vec<CategoryCount>, JobQueryError>;
}
