use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, QueryFilter, QueryOrder,
    QuerySelect,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::jobs::{Column as JobColumn, Entity as JobEntity, Model as JobModel};
use crate::job::application::domain::entities::Job;
use crate::job::application::ports::outgoing::{CategoryCount, JobQuery, JobQueryError};

#[derive(Debug, FromQueryResult)]
struct CategoryCountRow {
    category: String,
    count: i64,
}

#[derive(Clone, Debug)]
pub struct JobQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl JobQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn db_error(e: sea_orm::DbErr) -> JobQueryError {
    JobQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl JobQuery for JobQueryPostgres {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Job>, JobQueryError> {
        let row = JobEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(row.map(JobModel::into_domain))
    }

    async fn list(&self, category: Option<&str>) -> Result<Vec<Job>, JobQueryError> {
        let mut select = JobEntity::find();
        if let Some(category) = category {
            select = select.filter(JobColumn::Category.eq(category));
        }

        let rows = select
            .order_by_desc(JobColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(rows.into_iter().map(JobModel::into_domain).collect())
    }

    async fn count_by_category(&self) -> Result<Vec<CategoryCount>, JobQueryError> {
        let rows = JobEntity::find()
            .select_only()
            .column(JobColumn::Category)
            .column_as(JobColumn::Id.count(), "count")
            .group_by(JobColumn::Category)
            .into_model::<CategoryCountRow>()
            .all(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(rows
            .into_iter()
            .map(|row| CategoryCount {
                category: row.category,
                count: row.count.max(0) as u64,
            })
            .collect())
    }
}
