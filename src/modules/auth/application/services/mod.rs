mod create_approved_user_service;
mod get_user_service;
mod list_pending_users_service;
mod login_user_service;
mod register_user_service;
mod replace_user_file_service;
mod review_user_service;
mod update_profile_service;

pub use create_approved_user_service::CreateApprovedUserService;
pub use get_user_service::GetUserService;
pub use list_pending_users_service::ListPendingUsersService;
pub use login_user_service::LoginUserService;
pub use register_user_service::RegisterUserService;
pub use replace_user_file_service::ReplaceUserFileService;
pub use review_user_service::ReviewUserService;
pub use update_profile_service::UpdateProfileService;
