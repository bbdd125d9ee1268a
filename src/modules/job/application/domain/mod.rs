pub mod categories;
pub mod entities;
