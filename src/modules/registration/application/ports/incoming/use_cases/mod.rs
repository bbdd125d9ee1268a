pub mod decide_registration;
pub mod get_registration;
pub mod list_pending_registrations;
pub mod submit_registration;

pub use decide_registration::{
    DecideRegistrationError, DecideRegistrationUseCase, RegistrationDecision,
};
pub use get_registration::{GetRegistrationError, GetRegistrationUseCase};
pub use list_pending_registrations::{
    ListPendingRegistrationsError, ListPendingRegistrationsUseCase,
};
pub use submit_registration::{SubmitRegistrationError, SubmitRegistrationUseCase};
