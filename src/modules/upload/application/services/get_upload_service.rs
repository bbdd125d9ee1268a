use async_trait::async_trait;
use uuid::Uuid;

use crate::upload::application::domain::entities::Upload;
use crate::upload::application::ports::incoming::use_cases::{GetUploadError, GetUploadUseCase};
use crate::upload::application::ports::outgoing::UploadQuery;

pub struct GetUploadService<Q>
where
    Q: UploadQuery,
{
    query: Q,
}

impl<Q> GetUploadService<Q>
where
    Q: UploadQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetUploadUseCase for GetUploadService<Q>
where
    Q: UploadQuery + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<Upload, GetUploadError> {
        self.query
            .find_by_id(id)
            .await
            .map_err(|e| GetUploadError::RepositoryError(e.to_string()))?
            .ok_or(GetUploadError::NotFound)
    }
}
