use std::sync::Arc;

use crate::upload::application::ports::incoming::use_cases::{
    CreateUploadUseCase, GetUploadUseCase, LinkUploadOwnerUseCase, ListPendingUploadsUseCase,
    ReviewUploadUseCase,
};

#[derive(Clone)]
pub struct UploadUseCases {
    pub create: Arc<dyn CreateUploadUseCase + Send + Sync>,
    pub get: Arc<dyn GetUploadUseCase + Send + Sync>,
    pub list_pending: Arc<dyn ListPendingUploadsUseCase + Send + Sync>,
    pub review: Arc<dyn ReviewUploadUseCase + Send + Sync>,
    pub link_owner: Arc<dyn LinkUploadOwnerUseCase + Send + Sync>,
}
