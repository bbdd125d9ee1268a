pub mod auth;
pub mod job;
pub mod registration;
pub mod upload;
