pub mod create_upload;
pub mod get_upload;
pub mod link_upload_owner;
pub mod list_pending_uploads;
pub mod review_upload;

pub use create_upload::{CreateUploadError, CreateUploadUseCase};
pub use get_upload::{GetUploadError, GetUploadUseCase};
pub use link_upload_owner::{LinkUploadOwnerError, LinkUploadOwnerUseCase};
pub use list_pending_uploads::{ListPendingUploadsError, ListPendingUploadsUseCase};
pub use review_upload::{ReviewUploadError, ReviewUploadUseCase};
