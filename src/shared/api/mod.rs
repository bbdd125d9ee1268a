mod intake;
mod json_config;
pub mod multipart;
mod response;

pub use intake::{credential_error_response, file_policy_error_response};
pub use json_config::custom_json_config;
pub use response::{ApiError, ApiResponse};
