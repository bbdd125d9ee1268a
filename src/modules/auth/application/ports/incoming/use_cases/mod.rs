pub mod create_approved_user;
pub mod get_user;
pub mod list_pending_users;
pub mod login_user;
pub mod register_user;
pub mod replace_user_file;
pub mod review_user;
pub mod update_profile;

pub use create_approved_user::{
    CreateApprovedUserError, CreateApprovedUserInput, CreateApprovedUserUseCase,
};
pub use get_user::{GetUserError, GetUserUseCase};
pub use list_pending_users::{ListPendingUsersError, ListPendingUsersUseCase};
pub use login_user::{LoginAudience, LoginError, LoginOutput, LoginRequest, LoginUserUseCase};
pub use register_user::{RegisterUserError, RegisterUserUseCase};
pub use replace_user_file::{ReplaceUserFileError, ReplaceUserFileUseCase};
pub use review_user::{ReviewUserError, ReviewUserInput, ReviewUserUseCase};
pub use update_profile::{UpdateProfileError, UpdateProfileInput, UpdateProfileUseCase};
