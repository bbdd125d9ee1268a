pub mod registration_query_postgres;
pub mod registration_repository_postgres;
pub mod sea_orm_entity;
