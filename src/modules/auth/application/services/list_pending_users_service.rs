use async_trait::async_trait;

use crate::auth::application::domain::entities::User;
use crate::auth::application::ports::incoming::use_cases::{
    ListPendingUsersError, ListPendingUsersUseCase,
};
use crate::auth::application::ports::outgoing::UserQuery;

pub struct ListPendingUsersService<Q>
where
    Q: UserQuery,
{
    user_query: Q,
}

impl<Q> ListPendingUsersService<Q>
where
    Q: UserQuery,
{
    pub fn new(user_query: Q) -> Self {
        Self { user_query }
    }
}

#[async_trait]
impl<Q> ListPendingUsersUseCase for ListPendingUsersService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<User>, ListPendingUsersError> {
        self.user_query
            .list_pending_applicants()
            .await
            .map_err(|e| ListPendingUsersError::RepositoryError(e.to_string()))
    }
}
