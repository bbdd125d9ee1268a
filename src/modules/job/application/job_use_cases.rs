use std::sync::Arc;

use crate::job::application::ports::incoming::use_cases::{
    CategoryStatsUseCase, CreateJobUseCase, DeleteJobUseCase, GetJobUseCase, ListJobsUseCase,
    UpdateJobUseCase,
};

#[derive(Clone)]
pub struct JobUseCases {
    pub list: Arc<dyn ListJobsUseCase + Send + Sync>,
    pub get: Arc<dyn GetJobUseCase + Send + Sync>,
    pub create: Arc<dyn CreateJobUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateJobUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteJobUseCase + Send + Sync>,
    pub category_stats: Arc<dyn CategoryStatsUseCase + Send + Sync>,
}
