mod browse_jobs;
mod category_stats;
mod manage_jobs;

pub use browse_jobs::*;
pub use category_stats::*;
pub use manage_jobs::*;
