use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::auth::application::domain::entities::{User, UserId};
use crate::auth::application::ports::outgoing::password_hasher::{HashError, PasswordHasher};
use crate::job::application::domain::entities::{Job, JobDraft};
use crate::registration::application::domain::entities::AdminRegistration;
use crate::shared::domain::{ApprovalStatus, CredentialSubmission, IncomingFile, StoredFile};
use crate::upload::application::domain::entities::Upload;

pub fn sample_incoming_pdf() -> IncomingFile {
    IncomingFile {
        filename: "ktp.pdf".to_string(),
        content_type: "application/pdf".to_string(),
        data: b"%PDF-1.7 fake".to_vec(),
    }
}

pub fn sample_stored_file() -> StoredFile {
    sample_incoming_pdf().into_stored(Utc::now())
}

pub fn sample_submission() -> CredentialSubmission {
    CredentialSubmission {
        name: "Siti Rahma".to_string(),
        email: "siti@example.com".to_string(),
        password: "hunter22".to_string(),
        file: Some(sample_incoming_pdf()),
    }
}

pub fn sample_user(is_admin: bool, status: ApprovalStatus) -> User {
    let now = Utc::now();
    User {
        id: UserId::from(Uuid::new_v4()),
        name: "Siti Rahma".to_string(),
        email: "siti@example.com".to_string(),
        password_hash: FakePasswordHasher::hash_of("hunter22"),
        is_admin,
        is_verified: status.grants_verification(),
        status,
        credential: Some(sample_stored_file()),
        profile_picture: None,
        created_at: now,
        updated_at: now,
    }
}

pub fn sample_registration(email: &str) -> AdminRegistration {
    let now = Utc::now();
    AdminRegistration {
        id: Uuid::new_v4(),
        name: "Budi Santoso".to_string(),
        email: email.to_string(),
        password_hash: FakePasswordHasher::hash_of("hunter22"),
        is_admin: true,
        credential: sample_stored_file(),
        status: ApprovalStatus::Pending,
        created_at: now,
        updated_at: now,
    }
}

pub fn sample_upload(owner: Option<UserId>) -> Upload {
    Upload {
        id: Uuid::new_v4(),
        file: sample_stored_file(),
        user_id: owner,
        status: ApprovalStatus::Pending,
        is_verified: false,
    }
}

pub fn sample_job_draft() -> JobDraft {
    JobDraft {
        title: "Civil Engineer".to_string(),
        company: "Department of Public Works".to_string(),
        category: "Engineering".to_string(),
        location: "City Hall".to_string(),
        description: "Supervise road and drainage projects".to_string(),
        salary: Some("IDR 9.000.000 / month".to_string()),
    }
}

pub fn sample_job(category: &str) -> Job {
    let now = Utc::now();
    let draft = sample_job_draft();
    Job {
        id: Uuid::new_v4(),
        title: draft.title,
        company: draft.company,
        category: category.to_string(),
        location: draft.location,
        description: draft.description,
        salary: draft.salary,
        created_at: now,
        updated_at: now,
    }
}

/// Deterministic hasher so service tests stay fast.
#[derive(Clone, Default)]
pub struct FakePasswordHasher;

impl FakePasswordHasher {
    pub fn hash_of(password: &str) -> String {
        format!("hashed:{password}")
    }
}

#[async_trait]
impl PasswordHasher for FakePasswordHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        Ok(Self::hash_of(password))
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        match hash.strip_prefix("hashed:") {
            Some(stored) => Ok(stored == password),
            None => Err(HashError::VerifyFailed),
        }
    }
}
