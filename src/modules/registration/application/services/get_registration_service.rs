use async_trait::async_trait;
use uuid::Uuid;

use crate::registration::application::domain::entities::AdminRegistration;
use crate::registration::application::ports::incoming::use_cases::{
    GetRegistrationError, GetRegistrationUseCase,
};
use crate::registration::application::ports::outgoing::RegistrationQuery;

pub struct GetRegistrationService<Q>
where
    Q: RegistrationQuery,
{
    query: Q,
}

impl<Q> GetRegistrationService<Q>
where
    Q: RegistrationQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetRegistrationUseCase for GetRegistrationService<Q>
where
    Q: RegistrationQuery + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<AdminRegistration, GetRegistrationError> {
        self.query
            .find_by_id(id)
            .await
            .map_err(|e| GetRegistrationError::RepositoryError(e.to_string()))?
            .ok_or(GetRegistrationError::NotFound)
    }
}
