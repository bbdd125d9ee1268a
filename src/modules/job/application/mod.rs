pub mod domain;
pub mod job_use_cases;
pub mod ports;
pub mod services;

pub use job_use_cases::JobUseCases;
