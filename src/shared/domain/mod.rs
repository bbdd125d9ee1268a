pub mod approval_status;
pub mod credentials;
pub mod file_policy;
pub mod stored_file;

pub use approval_status::{ApprovalStatus, InvalidApprovalStatus};
pub use credentials::{CredentialError, CredentialSubmission, ValidCredentials};
pub use file_policy::{FilePolicy, FilePolicyError};
pub use stored_file::{FileMetadata, IncomingFile, StoredFile};
