use async_trait::async_trait;

use crate::auth::application::domain::entities::{User, UserId};
use crate::auth::application::ports::incoming::use_cases::{GetUserError, GetUserUseCase};
use crate::auth::application::ports::outgoing::UserQuery;

pub struct GetUserService<Q>
where
    Q: UserQuery,
{
    user_query: Q,
}

impl<Q> GetUserService<Q>
where
    Q: UserQuery,
{
    pub fn new(user_query: Q) -> Self {
        Self { user_query }
    }
}

#[async_trait]
impl<Q> GetUserUseCase for GetUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, user_id: UserId) -> Result<User, GetUserError> {
        self.user_query
            .find_by_id(user_id)
            .await
            .map_err(|e| GetUserError::RepositoryError(e.to_string()))?
            .ok_or(GetUserError::NotFound)
    }
}
