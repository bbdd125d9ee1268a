use async_trait::async_trait;

use crate::upload::application::domain::entities::Upload;
use crate::upload::application::ports::incoming::use_cases::{
    ListPendingUploadsError, ListPendingUploadsUseCase,
};
use crate::upload::application::ports::outgoing::UploadQuery;

pub struct ListPendingUploadsService<Q>
where
    Q: UploadQuery,
{
    query: Q,
}

impl<Q> ListPendingUploadsService<Q>
where
    Q: UploadQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListPendingUploadsUseCase for ListPendingUploadsService<Q>
where
    Q: UploadQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Upload>, ListPendingUploadsError> {
        self.query
            .list_pending()
            .await
            .map_err(|e| ListPendingUploadsError::RepositoryError(e.to_string()))
    }
}
