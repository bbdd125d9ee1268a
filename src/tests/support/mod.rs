pub mod app_state_builder;
pub mod auth;
pub mod fixtures;
pub mod in_memory;
pub mod multipart;
pub mod stubs;
