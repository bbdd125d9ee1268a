use async_trait::async_trait;

use crate::registration::application::domain::entities::AdminRegistration;
use crate::registration::application::ports::incoming::use_cases::{
    ListPendingRegistrationsError, ListPendingRegistrationsUseCase,
};
use crate::registration::application::ports::outgoing::RegistrationQuery;

pub struct ListPendingRegistrationsService<Q>
where
    Q: RegistrationQuery,
{
    query: Q,
}

impl<Q> ListPendingRegistrationsService<Q>
where
    Q: RegistrationQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListPendingRegistrationsUseCase for ListPendingRegistrationsService<Q>
where
    Q: RegistrationQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<AdminRegistration>, ListPendingRegistrationsError> {
        self.query
            .list_pending()
            .await
            .map_err(|e| ListPendingRegistrationsError::RepositoryError(e.to_string()))
    }
}
