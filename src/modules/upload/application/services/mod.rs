mod create_upload_service;
mod get_upload_service;
mod link_upload_owner_service;
mod list_pending_uploads_service;
mod review_upload_service;

pub use create_upload_service::CreateUploadService;
pub use get_upload_service::GetUploadService;
pub use link_upload_owner_service::LinkUploadOwnerService;
pub use list_pending_uploads_service::ListPendingUploadsService;
pub use review_upload_service::ReviewUploadService;
