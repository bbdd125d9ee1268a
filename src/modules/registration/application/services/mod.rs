mod decide_registration_service;
mod get_registration_service;
mod list_pending_registrations_service;
mod submit_registration_service;

pub use decide_registration_service::DecideRegistrationService;
pub use get_registration_service::GetRegistrationService;
pub use list_pending_registrations_service::ListPendingRegistrationsService;
pub use submit_registration_service::SubmitRegistrationService;
