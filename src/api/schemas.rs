// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

/// Standard success response wrapper
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    /// Always true for successful responses
    #[schema(example = true)]
    pub success: bool,
    /// Response data
    pub data: T,
}

/// Standard error response wrapper
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false for error responses
    #[schema(example = false)]
    pub success: bool,
    /// Error details
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Error code for programmatic handling
    #[schema(example = "FILE_REQUIRED")]
    pub code: String,

    /// Human-readable error message
    #[schema(example = "A credential file is required")]
    pub message: String,
}

/// Multipart body of both intake routes.
#[allow(dead_code)]
#[derive(ToSchema)]
pub struct CredentialForm {
    #[schema(example = "Siti Rahma")]
    pub name: String,
    #[schema(example = "siti@example.com")]
    pub email: String,
    pub password: String,
    /// JPEG, PNG or PDF, at most 5 MiB
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}

/// Multipart body carrying a single file.
#[allow(dead_code)]
#[derive(ToSchema)]
pub struct FileForm {
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}

/// Multipart body of `POST /api/upload`.
#[allow(dead_code)]
#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct UploadForm {
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
    /// Optional owner to link right away
    #[schema(value_type = Option<String>, format = Uuid)]
    pub user_id: Option<String>,
}
