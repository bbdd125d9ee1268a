mod create_upload;
mod get_upload;
mod list_pending_uploads;
mod review_upload;

pub use create_upload::*;
pub use get_upload::*;
pub use list_pending_uploads::*;
pub use review_upload::*;
