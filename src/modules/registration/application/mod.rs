pub mod domain;
pub mod ports;
pub mod registration_use_cases;
pub mod services;

pub use registration_use_cases::RegistrationUseCases;
