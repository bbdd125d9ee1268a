use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: Uuid,
    #[schema(example = "Civil Engineer")]
    pub title: String,
    #[schema(example = "Department of Public Works")]
    pub company: String,
    #[schema(example = "Engineering")]
    pub category: String,
    #[schema(example = "City Hall, 3rd floor")]
    pub location: String,
    pub description: String,
    #[schema(example = "IDR 9.000.000 / month")]
    pub salary: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JobValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),
}

/// Editable fields of a job, as submitted on create and full update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobDraft {
    pub title: String,
    pub company: String,
    pub category: String,
    pub location: String,
    pub description: String,
    pub salary: Option<String>,
}

impl JobDraft {
    /// Trims every field. A blank salary becomes `None`.
    pub fn validate(self) -> Result<Self, JobValidationError> {
        fn required(value: String, field: &'static str) -> Result<String, JobValidationError> {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                return Err(JobValidationError::MissingField(field));
            }
            Ok(trimmed.to_string())
        }

        Ok(Self {
            title: required(self.title, "title")?,
            company: required(self.company, "company")?,
            category: required(self.category, "category")?,
            location: required(self.location, "location")?,
            description: required(self.description, "description")?,
            salary: self
                .salary
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        })
    }
}
