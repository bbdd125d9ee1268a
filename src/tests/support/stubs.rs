//! Canned use cases for route tests. Each `StubX(result)` answers every call with a clone of `result`.
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::auth::application::domain::entities::{User, UserFileSlot, UserId};
use crate::auth::application::ports::incoming::use_cases::{
    CreateApprovedUserError, CreateApprovedUserInput, CreateApprovedUserUseCase, GetUserError,
    GetUserUseCase, ListPendingUsersError, ListPendingUsersUseCase, LoginAudience, LoginError,
    LoginOutput, LoginRequest, LoginUserUseCase, RegisterUserError, RegisterUserUseCase,
    ReplaceUserFileError, ReplaceUserFileUseCase, ReviewUserError, ReviewUserInput,
    ReviewUserUseCase, UpdateProfileError, UpdateProfileInput, UpdateProfileUseCase,
};
use crate::job::application::domain::categories::CategoryStat;
use crate::job::application::domain::entities::{Job, JobDraft};
use crate::job::application::ports::incoming::use_cases::{
    CategoryStatsError, CategoryStatsUseCase, CreateJobError, CreateJobUseCase, DeleteJobError,
    DeleteJobUseCase, GetJobError, GetJobUseCase, ListJobsError, ListJobsUseCase, UpdateJobError,
    UpdateJobUseCase,
};
use crate::registration::application::domain::entities::AdminRegistration;
use crate::registration::application::ports::incoming::use_cases::{
    DecideRegistrationError, DecideRegistrationUseCase, GetRegistrationError,
    GetRegistrationUseCase, ListPendingRegistrationsError, ListPendingRegistrationsUseCase,
    RegistrationDecision, SubmitRegistrationError, SubmitRegistrationUseCase,
};
use crate::shared::domain::{CredentialSubmission, IncomingFile};
use crate::upload::application::domain::entities::Upload;
use crate::upload::application::ports::incoming::use_cases::{
    CreateUploadError, CreateUploadUseCase, GetUploadError, GetUploadUseCase,
    LinkUploadOwnerError, LinkUploadOwnerUseCase, ListPendingUploadsError,
    ListPendingUploadsUseCase, ReviewUploadError, ReviewUploadUseCase,
};

// ---- auth ----

#[derive(Clone)]
pub struct StubRegisterUser(pub Result<User, RegisterUserError>);

#[async_trait]
impl RegisterUserUseCase for StubRegisterUser {
    async fn execute(&self, _submission: CredentialSubmission) -> Result<User, RegisterUserError> {
        self.0.clone()
    }
}

/// Rejects every login; route tests that need a success bring their own.
#[derive(Clone, Default)]
pub struct StubLoginUser;

#[async_trait]
impl LoginUserUseCase for StubLoginUser {
    async fn execute(
        &self,
        _request: LoginRequest,
        _audience: LoginAudience,
    ) -> Result<LoginOutput, LoginError> {
        Err(LoginError::InvalidCredentials)
    }
}

#[derive(Clone)]
pub struct StubListPendingUsers(pub Result<Vec<User>, ListPendingUsersError>);

#[async_trait]
impl ListPendingUsersUseCase for StubListPendingUsers {
    async fn execute(&self) -> Result<Vec<User>, ListPendingUsersError> {
        self.0.clone()
    }
}

#[derive(Clone)]
pub struct StubGetUser(pub Result<User, GetUserError>);

#[async_trait]
impl GetUserUseCase for StubGetUser {
    async fn execute(&self, _user_id: UserId) -> Result<User, GetUserError> {
        self.0.clone()
    }
}

#[derive(Clone)]
pub struct StubReviewUser(pub Result<User, ReviewUserError>);

#[async_trait]
impl ReviewUserUseCase for StubReviewUser {
    async fn execute(
        &self,
        _user_id: UserId,
        _input: ReviewUserInput,
    ) -> Result<User, ReviewUserError> {
        self.0.clone()
    }
}

#[derive(Clone)]
pub struct StubCreateApprovedUser(pub Result<User, CreateApprovedUserError>);

#[async_trait]
impl CreateApprovedUserUseCase for StubCreateApprovedUser {
    async fn execute(
        &self,
        _input: CreateApprovedUserInput,
    ) -> Result<User, CreateApprovedUserError> {
        self.0.clone()
    }
}

#[derive(Clone)]
pub struct StubUpdateProfile(pub Result<User, UpdateProfileError>);

#[async_trait]
impl UpdateProfileUseCase for StubUpdateProfile {
    async fn execute(
        &self,
        _user_id: UserId,
        _input: UpdateProfileInput,
    ) -> Result<User, UpdateProfileError> {
        self.0.clone()
    }
}

#[derive(Clone)]
pub struct StubReplaceUserFile(pub Result<User, ReplaceUserFileError>);

#[async_trait]
impl ReplaceUserFileUseCase for StubReplaceUserFile {
    async fn execute(
        &self,
        _user_id: UserId,
        _slot: UserFileSlot,
        _file: IncomingFile,
    ) -> Result<User, ReplaceUserFileError> {
        self.0.clone()
    }
}

// ---- registration ----

#[derive(Clone)]
pub struct StubSubmitRegistration(pub Result<AdminRegistration, SubmitRegistrationError>);

#[async_trait]
impl SubmitRegistrationUseCase for StubSubmitRegistration {
    async fn execute(
        &self,
        _submission: CredentialSubmission,
    ) -> Result<AdminRegistration, SubmitRegistrationError> {
        self.0.clone()
    }
}

#[derive(Clone)]
pub struct StubListPendingRegistrations(
    pub Result<Vec<AdminRegistration>, ListPendingRegistrationsError>,
);

#[async_trait]
impl ListPendingRegistrationsUseCase for StubListPendingRegistrations {
    async fn execute(&self) -> Result<Vec<AdminRegistration>, ListPendingRegistrationsError> {
        self.0.clone()
    }
}

#[derive(Clone)]
pub struct StubGetRegistration(pub Result<AdminRegistration, GetRegistrationError>);

#[async_trait]
impl GetRegistrationUseCase for StubGetRegistration {
    async fn execute(&self, _id: Uuid) -> Result<AdminRegistration, GetRegistrationError> {
        self.0.clone()
    }
}

#[derive(Clone)]
pub struct StubDecideRegistration(pub Result<RegistrationDecision, DecideRegistrationError>);

#[async_trait]
impl DecideRegistrationUseCase for StubDecideRegistration {
    async fn execute(
        &self,
        _id: Uuid,
        _status: &str,
    ) -> Result<RegistrationDecision, DecideRegistrationError> {
        self.0.clone()
    }
}

// ---- upload ----

#[derive(Clone)]
pub struct StubCreateUpload(pub Result<Upload, CreateUploadError>);

#[async_trait]
impl CreateUploadUseCase for StubCreateUpload {
    async fn execute(
        &self,
        _file: IncomingFile,
        _owner: Option<UserId>,
    ) -> Result<Upload, CreateUploadError> {
        self.0.clone()
    }
}

#[derive(Clone)]
pub struct StubGetUpload(pub Result<Upload, GetUploadError>);

#[async_trait]
impl GetUploadUseCase for StubGetUpload {
    async fn execute(&self, _id: Uuid) -> Result<Upload, GetUploadError> {
        self.0.clone()
    }
}

#[derive(Clone)]
pub struct StubListPendingUploads(pub Result<Vec<Upload>, ListPendingUploadsError>);

#[async_trait]
impl ListPendingUploadsUseCase for StubListPendingUploads {
    async fn execute(&self) -> Result<Vec<Upload>, ListPendingUploadsError> {
        self.0.clone()
    }
}

#[derive(Clone)]
pub struct StubReviewUpload(pub Result<Upload, ReviewUploadError>);

#[async_trait]
impl ReviewUploadUseCase for StubReviewUpload {
    async fn execute(
        &self,
        _id: Uuid,
        _status: &str,
        _owner: Option<UserId>,
    ) -> Result<Upload, ReviewUploadError> {
        self.0.clone()
    }
}

#[derive(Clone)]
pub struct StubLinkUploadOwner(pub Result<Upload, LinkUploadOwnerError>);

#[async_trait]
impl LinkUploadOwnerUseCase for StubLinkUploadOwner {
    async fn execute(&self, _id: Uuid, _owner: UserId) -> Result<Upload, LinkUploadOwnerError> {
        self.0.clone()
    }
}

// ---- jobs ----

/// Returns fixed jobs and remembers the category filter it was called with.
#[derive(Clone, Default)]
pub struct RecordingListJobs {
    jobs: Vec<Job>,
    categories: Arc<Mutex<Vec<Option<String>>>>,
}

impl RecordingListJobs {
    pub fn returning(jobs: Vec<Job>) -> Self {
        Self {
            jobs,
            categories: Arc::default(),
        }
    }

    pub fn last_category(&self) -> Option<String> {
        self.categories.lock().unwrap().last().cloned().flatten()
    }
}

#[async_trait]
impl ListJobsUseCase for RecordingListJobs {
    async fn execute(&self, category: Option<String>) -> Result<Vec<Job>, ListJobsError> {
        self.categories.lock().unwrap().push(category);
        Ok(self.jobs.clone())
    }
}

#[derive(Clone)]
pub struct StubGetJob(pub Result<Job, GetJobError>);

#[async_trait]
impl GetJobUseCase for StubGetJob {
    async fn execute(&self, _id: Uuid) -> Result<Job, GetJobError> {
        self.0.clone()
    }
}

#[derive(Clone)]
pub struct StubCreateJob(pub Result<Job, CreateJobError>);

#[async_trait]
impl CreateJobUseCase for StubCreateJob {
    async fn execute(&self, _draft: JobDraft) -> Result<Job, CreateJobError> {
        self.0.clone()
    }
}

#[derive(Clone)]
pub struct StubUpdateJob(pub Result<Job, UpdateJobError>);

#[async_trait]
impl UpdateJobUseCase for StubUpdateJob {
    async fn execute(&self, _id: Uuid, _draft: JobDraft) -> Result<Job, UpdateJobError> {
        self.0.clone()
    }
}

#[derive(Clone)]
pub struct StubDeleteJob(pub Result<(), DeleteJobError>);

#[async_trait]
impl DeleteJobUseCase for StubDeleteJob {
    async fn execute(&self, _id: Uuid) -> Result<(), DeleteJobError> {
        self.0.clone()
    }
}

#[derive(Clone)]
pub struct StubCategoryStats(pub Result<Vec<CategoryStat>, CategoryStatsError>);

#[async_trait]
impl CategoryStatsUseCase for StubCategoryStats {
    async fn execute(&self) -> Result<Vec<CategoryStat>, CategoryStatsError> {
        self.0.clone()
    }
}
