mod decide_registration;
mod get_registration;
mod list_pending_registrations;
mod submit_registration;

pub use decide_registration::*;
pub use get_registration::*;
pub use list_pending_registrations::*;
pub use submit_registration::*;
