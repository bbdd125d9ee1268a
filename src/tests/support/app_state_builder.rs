use actix_web::web;
use std::sync::Arc;

use crate::auth::application::ports::incoming::use_cases::{
    CreateApprovedUserError, CreateApprovedUserUseCase, GetUserError, GetUserUseCase,
    ListPendingUsersUseCase, LoginUserUseCase, RegisterUserError, RegisterUserUseCase,
    ReplaceUserFileError, ReplaceUserFileUseCase, ReviewUserError, ReviewUserUseCase,
    UpdateProfileError, UpdateProfileUseCase,
};
use crate::auth::application::AuthUseCases;
use crate::job::application::domain::categories::zero_filled;
use crate::job::application::ports::incoming::use_cases::{
    CategoryStatsUseCase, CreateJobError, CreateJobUseCase, DeleteJobError, DeleteJobUseCase,
    GetJobError, GetJobUseCase, ListJobsUseCase, UpdateJobError, UpdateJobUseCase,
};
use crate::job::application::JobUseCases;
use crate::registration::application::ports::incoming::use_cases::{
    DecideRegistrationError, DecideRegistrationUseCase, GetRegistrationError,
    GetRegistrationUseCase, ListPendingRegistrationsUseCase, SubmitRegistrationError,
    SubmitRegistrationUseCase,
};
use crate::registration::application::RegistrationUseCases;
use crate::shared::domain::FilePolicy;
use crate::tests::support::stubs::*;
use crate::upload::application::ports::incoming::use_cases::{
    CreateUploadError, CreateUploadUseCase, GetUploadError, GetUploadUseCase,
    LinkUploadOwnerError, LinkUploadOwnerUseCase, ListPendingUploadsUseCase, ReviewUploadError,
    ReviewUploadUseCase,
};
use crate::upload::application::UploadUseCases;
use crate::AppState;

const UNUSED: &str = "not used in this test";

/// `AppState` whose use cases are all stubs. Override only what a test touches.
pub struct TestAppStateBuilder {
    auth: AuthUseCases,
    registration: RegistrationUseCases,
    upload: UploadUseCases,
    job: JobUseCases,
    file_policy: FilePolicy,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            auth: AuthUseCases {
                register: Arc::new(StubRegisterUser(Err(RegisterUserError::RepositoryError(
                    UNUSED.to_string(),
                )))),
                login: Arc::new(StubLoginUser),
                list_pending: Arc::new(StubListPendingUsers(Ok(vec![]))),
                get: Arc::new(StubGetUser(Err(GetUserError::NotFound))),
                review: Arc::new(StubReviewUser(Err(ReviewUserError::NotFound))),
                create_approved: Arc::new(StubCreateApprovedUser(Err(
                    CreateApprovedUserError::RepositoryError(UNUSED.to_string()),
                ))),
                update_profile: Arc::new(StubUpdateProfile(Err(UpdateProfileError::NotFound))),
                replace_file: Arc::new(StubReplaceUserFile(Err(ReplaceUserFileError::NotFound))),
            },
            registration: RegistrationUseCases {
                submit: Arc::new(StubSubmitRegistration(Err(
                    SubmitRegistrationError::RepositoryError(UNUSED.to_string()),
                ))),
                list_pending: Arc::new(StubListPendingRegistrations(Ok(vec![]))),
                get: Arc::new(StubGetRegistration(Err(GetRegistrationError::NotFound))),
                decide: Arc::new(StubDecideRegistration(Err(
                    DecideRegistrationError::NotFound,
                ))),
            },
            upload: UploadUseCases {
                create: Arc::new(StubCreateUpload(Err(CreateUploadError::RepositoryError(
                    UNUSED.to_string(),
                )))),
                get: Arc::new(StubGetUpload(Err(GetUploadError::NotFound))),
                list_pending: Arc::new(StubListPendingUploads(Ok(vec![]))),
                review: Arc::new(StubReviewUpload(Err(ReviewUploadError::UploadNotFound))),
                link_owner: Arc::new(StubLinkUploadOwner(Err(
                    LinkUploadOwnerError::UploadNotFound,
                ))),
            },
            job: JobUseCases {
                list: Arc::new(RecordingListJobs::default()),
                get: Arc::new(StubGetJob(Err(GetJobError::NotFound))),
                create: Arc::new(StubCreateJob(Err(CreateJobError::RepositoryError(
                    UNUSED.to_string(),
                )))),
                update: Arc::new(StubUpdateJob(Err(UpdateJobError::NotFound))),
                delete: Arc::new(StubDeleteJob(Err(DeleteJobError::NotFound))),
                category_stats: Arc::new(StubCategoryStats(Ok(zero_filled()))),
            },
            file_policy: FilePolicy::default(),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_register_user(mut self, uc: impl RegisterUserUseCase + 'static) -> Self {
        self.auth.register = Arc::new(uc);
        self
    }

    pub fn with_login_user(mut self, uc: impl LoginUserUseCase + 'static) -> Self {
        self.auth.login = Arc::new(uc);
        self
    }

    pub fn with_list_pending_users(mut self, uc: impl ListPendingUsersUseCase + 'static) -> Self {
        self.auth.list_pending = Arc::new(uc);
        self
    }

    pub fn with_get_user(mut self, uc: impl GetUserUseCase + 'static) -> Self {
        self.auth.get = Arc::new(uc);
        self
    }

    pub fn with_review_user(mut self, uc: impl ReviewUserUseCase + 'static) -> Self {
        self.auth.review = Arc::new(uc);
        self
    }

    pub fn with_create_approved_user(
        mut self,
        uc: impl CreateApprovedUserUseCase + 'static,
    ) -> Self {
        self.auth.create_approved = Arc::new(uc);
        self
    }

    pub fn with_update_profile(mut self, uc: impl UpdateProfileUseCase + 'static) -> Self {
        self.auth.update_profile = Arc::new(uc);
        self
    }

    pub fn with_replace_user_file(mut self, uc: impl ReplaceUserFileUseCase + 'static) -> Self {
        self.auth.replace_file = Arc::new(uc);
        self
    }

    pub fn with_submit_registration(
        mut self,
        uc: impl SubmitRegistrationUseCase + 'static,
    ) -> Self {
        self.registration.submit = Arc::new(uc);
        self
    }

    pub fn with_list_pending_registrations(
        mut self,
        uc: impl ListPendingRegistrationsUseCase + 'static,
    ) -> Self {
        self.registration.list_pending = Arc::new(uc);
        self
    }

    pub fn with_get_registration(mut self, uc: impl GetRegistrationUseCase + 'static) -> Self {
        self.registration.get = Arc::new(uc);
        self
    }

    pub fn with_decide_registration(
        mut self,
        uc: impl DecideRegistrationUseCase + 'static,
    ) -> Self {
        self.registration.decide = Arc::new(uc);
        self
    }

    pub fn with_create_upload(mut self, uc: impl CreateUploadUseCase + 'static) -> Self {
        self.upload.create = Arc::new(uc);
        self
    }

    pub fn with_get_upload(mut self, uc: impl GetUploadUseCase + 'static) -> Self {
        self.upload.get = Arc::new(uc);
        self
    }

    pub fn with_list_pending_uploads(
        mut self,
        uc: impl ListPendingUploadsUseCase + 'static,
    ) -> Self {
        self.upload.list_pending = Arc::new(uc);
        self
    }

    pub fn with_review_upload(mut self, uc: impl ReviewUploadUseCase + 'static) -> Self {
        self.upload.review = Arc::new(uc);
        self
    }

    pub fn with_link_upload_owner(mut self, uc: impl LinkUploadOwnerUseCase + 'static) -> Self {
        self.upload.link_owner = Arc::new(uc);
        self
    }

    pub fn with_list_jobs(mut self, uc: impl ListJobsUseCase + 'static) -> Self {
        self.job.list = Arc::new(uc);
        self
    }

    pub fn with_get_job(mut self, uc: impl GetJobUseCase + 'static) -> Self {
        self.job.get = Arc::new(uc);
        self
    }

    pub fn with_create_job(mut self, uc: impl CreateJobUseCase + 'static) -> Self {
        self.job.create = Arc::new(uc);
        self
    }

    pub fn with_update_job(mut self, uc: impl UpdateJobUseCase + 'static) -> Self {
        self.job.update = Arc::new(uc);
        self
    }

    pub fn with_delete_job(mut self, uc: impl DeleteJobUseCase + 'static) -> Self {
        self.job.delete = Arc::new(uc);
        self
    }

    pub fn with_category_stats(mut self, uc: impl CategoryStatsUseCase + 'static) -> Self {
        self.job.category_stats = Arc::new(uc);
        self
    }

    pub fn with_file_policy(mut self, policy: FilePolicy) -> Self {
        self.file_policy = policy;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            auth: self.auth,
            registration: self.registration,
            upload: self.upload,
            job: self.job,
            file_policy: self.file_policy,
        })
    }
}
