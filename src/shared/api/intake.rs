use actix_web::HttpResponse;

use crate::shared::api::ApiResponse;
use crate::shared::domain::{CredentialError, FilePolicyError};

pub fn file_policy_error_response(err: &FilePolicyError) -> HttpResponse {
    let code = match err {
        FilePolicyError::EmptyFile => "EMPTY_FILE",
        FilePolicyError::InvalidFileName => "INVALID_FILE_NAME",
        FilePolicyError::FileTooLarge { .. } => "FILE_TOO_LARGE",
        FilePolicyError::InvalidMimeType(_) => "INVALID_FILE_TYPE",
    };
    ApiResponse::bad_request(code, &err.to_string())
}

pub fn credential_error_response(err: &CredentialError) -> HttpResponse {
    match err {
        CredentialError::FileRequired => {
            ApiResponse::bad_request("FILE_REQUIRED", &err.to_string())
        }
        CredentialError::InvalidFile(e) => file_policy_error_response(e),
        CredentialError::EmptyName
        | CredentialError::InvalidEmail
        | CredentialError::EmptyPassword => {
            ApiResponse::bad_request("VALIDATION_ERROR", &err.to_string())
        }
    }
}
