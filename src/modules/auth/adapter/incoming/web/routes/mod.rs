mod create_approved_user;
mod get_user;
mod list_pending_users;
mod login_user;
mod profile;
mod register_user;
mod replace_user_file;
mod review_user;

// Glob re-exports keep utoipa's generated `__path_*` items reachable from here.
pub use create_approved_user::*;
pub use get_user::*;
pub use list_pending_users::*;
pub use login_user::*;
pub use profile::*;
pub use register_user::*;
pub use replace_user_file::*;
pub use review_user::*;
