use std::sync::Arc;

use crate::registration::application::ports::incoming::use_cases::{
    DecideRegistrationUseCase, GetRegistrationUseCase, ListPendingRegistrationsUseCase,
    SubmitRegistrationUseCase,
};

#[derive(Clone)]
pub struct RegistrationUseCases {
    pub submit: Arc<dyn SubmitRegistrationUseCase + Send + Sync>,
    pub list_pending: Arc<dyn ListPendingRegistrationsUseCase + Send + Sync>,
    pub get: Arc<dyn GetRegistrationUseCase + Send + Sync>,
    pub decide: Arc<dyn DecideRegistrationUseCase + Send + Sync>,
}
