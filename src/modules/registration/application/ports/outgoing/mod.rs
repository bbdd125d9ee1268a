pub mod registration_query;
pub mod registration_repository;

pub use registration_query::{RegistrationQuery, RegistrationQueryError};
pub use registration_repository::{
    Materialization, NewRegistration, RegistrationRepository, RegistrationRepositoryError,
};
