pub mod upload_query;
pub mod upload_repository;

pub use upload_query::{UploadQuery, UploadQueryError};
pub use upload_repository::{UploadRepository, UploadRepositoryError};
