use async_trait::async_trait;

use crate::auth::application::domain::entities::User;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListPendingUsersError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListPendingUsersUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<User>, ListPendingUsersError>;
}
