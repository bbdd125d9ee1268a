use std::sync::Arc;

use crate::auth::application::ports::incoming::use_cases::{
    CreateApprovedUserUseCase, GetUserUseCase, ListPendingUsersUseCase, LoginUserUseCase,
    RegisterUserUseCase, ReplaceUserFileUseCase, ReviewUserUseCase, UpdateProfileUseCase,
};

#[derive(Clone)]
pub struct AuthUseCases {
    pub register: Arc<dyn RegisterUserUseCase + Send + Sync>,
    pub login: Arc<dyn LoginUserUseCase + Send + Sync>,
    pub list_pending: Arc<dyn ListPendingUsersUseCase + Send + Sync>,
    pub get: Arc<dyn GetUserUseCase + Send + Sync>,
    pub review: Arc<dyn ReviewUserUseCase + Send + Sync>,
    pub create_approved: Arc<dyn CreateApprovedUserUseCase + Send + Sync>,
    pub update_profile: Arc<dyn UpdateProfileUseCase + Send + Sync>,
    pub replace_file: Arc<dyn ReplaceUserFileUseCase + Send + Sync>,
}
