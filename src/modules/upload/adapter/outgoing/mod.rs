pub mod sea_orm_entity;
pub mod upload_query_postgres;
pub mod upload_repository_postgres;
