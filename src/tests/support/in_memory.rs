use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::auth::application::domain::entities::{User, UserFileSlot, UserId};
use crate::auth::application::ports::outgoing::{
    NewUser, UserPatch, UserQuery, UserQueryError, UserRepository, UserRepositoryError,
};
use crate::job::application::domain::entities::{Job, JobDraft};
use crate::job::application::ports::outgoing::{
    CategoryCount, JobQuery, JobQueryError, JobRepository, JobRepositoryError,
};
use crate::registration::application::domain::entities::AdminRegistration;
use crate::registration::application::ports::outgoing::{
    Materialization, NewRegistration, RegistrationQuery, RegistrationQueryError,
    RegistrationRepository, RegistrationRepositoryError,
};
use crate::shared::domain::{ApprovalStatus, StoredFile};
use crate::upload::application::domain::entities::Upload;
use crate::upload::application::ports::outgoing::{
    UploadQuery, UploadQueryError, UploadRepository, UploadRepositoryError,
};

/// Shared user table for service tests. Clones see the same rows.
#[derive(Clone, Default)]
pub struct InMemoryUsers {
    rows: Arc<Mutex<Vec<User>>>,
    broken: Option<String>,
}

impl InMemoryUsers {
    pub fn with(users: Vec<User>) -> Self {
        Self {
            rows: Arc::new(Mutex::new(users)),
            broken: None,
        }
    }

    /// Every call fails with a database error carrying `msg`.
    pub fn broken(msg: &str) -> Self {
        Self {
            rows: Arc::default(),
            broken: Some(msg.to_string()),
        }
    }

    pub fn all(&self) -> Vec<User> {
        self.rows.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), String> {
        match &self.broken {
            Some(msg) => Err(msg.clone()),
            None => Ok(()),
        }
    }

    fn update<F>(&self, user_id: UserId, f: F) -> Result<User, UserRepositoryError>
    where
        F: FnOnce(&mut User),
    {
        self.check().map_err(UserRepositoryError::DatabaseError)?;
        let mut rows = self.rows.lock().unwrap();
        let user = rows
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or(UserRepositoryError::NotFound)?;
        f(user);
        user.updated_at = Utc::now();
        Ok(user.clone())
    }
}

#[async_trait]
impl UserQuery for InMemoryUsers {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>, UserQueryError> {
        self.check().map_err(UserQueryError::DatabaseError)?;
        Ok(self.all().into_iter().find(|u| u.id == user_id))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError> {
        self.check().map_err(UserQueryError::DatabaseError)?;
        Ok(self.all().into_iter().find(|u| u.email == email))
    }

    async fn list_pending_applicants(&self) -> Result<Vec<User>, UserQueryError> {
        self.check().map_err(UserQueryError::DatabaseError)?;
        Ok(self
            .all()
            .into_iter()
            .filter(|u| !u.is_admin && u.status == ApprovalStatus::Pending)
            .collect())
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn create_user(&self, user: NewUser) -> Result<User, UserRepositoryError> {
        self.check().map_err(UserRepositoryError::DatabaseError)?;
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|u| u.email == user.email) {
            return Err(UserRepositoryError::EmailAlreadyExists);
        }

        let now = Utc::now();
        let created = User {
            id: UserId::from(Uuid::new_v4()),
            name: user.name,
            email: user.email,
            password_hash: user.password_hash,
            is_admin: user.is_admin,
            is_verified: user.is_verified,
            status: user.status,
            credential: user.credential,
            profile_picture: None,
            created_at: now,
            updated_at: now,
        };
        rows.push(created.clone());
        Ok(created)
    }

    async fn patch_user(
        &self,
        user_id: UserId,
        patch: UserPatch,
    ) -> Result<User, UserRepositoryError> {
        if let Some(email) = &patch.email {
            let taken = self
                .all()
                .iter()
                .any(|u| u.id != user_id && &u.email == email);
            if taken {
                return Err(UserRepositoryError::EmailAlreadyExists);
            }
        }

        self.update(user_id, |user| {
            if let Some(name) = patch.name {
                user.name = name;
            }
            if let Some(email) = patch.email {
                user.email = email;
            }
            if let Some(status) = patch.status {
                user.status = status;
            }
            if let Some(is_verified) = patch.is_verified {
                user.is_verified = is_verified;
            }
        })
    }

    async fn set_file(
        &self,
        user_id: UserId,
        slot: UserFileSlot,
        file: StoredFile,
    ) -> Result<User, UserRepositoryError> {
        self.update(user_id, |user| match slot {
            UserFileSlot::Credential => user.credential = Some(file),
            UserFileSlot::ProfilePicture => user.profile_picture = Some(file),
        })
    }
}

/// Registration table that materializes approved rows into an [`InMemoryUsers`].
/// Both locks are held across an approval, mirroring the database transaction.
#[derive(Clone, Default)]
pub struct InMemoryRegistrations {
    rows: Arc<Mutex<Vec<AdminRegistration>>>,
    users: InMemoryUsers,
    broken: Option<String>,
}

impl InMemoryRegistrations {
    pub fn with(registrations: Vec<AdminRegistration>) -> Self {
        Self {
            rows: Arc::new(Mutex::new(registrations)),
            ..Default::default()
        }
    }

    pub fn broken(msg: &str) -> Self {
        Self {
            broken: Some(msg.to_string()),
            ..Default::default()
        }
    }

    pub fn materializing_into(mut self, users: InMemoryUsers) -> Self {
        self.users = users;
        self
    }

    pub fn all(&self) -> Vec<AdminRegistration> {
        self.rows.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), String> {
        match &self.broken {
            Some(msg) => Err(msg.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl RegistrationQuery for InMemoryRegistrations {
    async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<AdminRegistration>, RegistrationQueryError> {
        self.check().map_err(RegistrationQueryError::DatabaseError)?;
        Ok(self.all().into_iter().find(|r| r.id == id))
    }

    async fn find_pending_by_email(
        &self,
        email: &str,
    ) -> Result<Option<AdminRegistration>, RegistrationQueryError> {
        self.check().map_err(RegistrationQueryError::DatabaseError)?;
        Ok(self
            .all()
            .into_iter()
            .find(|r| r.email == email && r.status == ApprovalStatus::Pending))
    }

    async fn list_pending(&self) -> Result<Vec<AdminRegistration>, RegistrationQueryError> {
        self.check().map_err(RegistrationQueryError::DatabaseError)?;
        Ok(self
            .all()
            .into_iter()
            .filter(|r| r.status == ApprovalStatus::Pending)
            .collect())
    }
}

#[async_trait]
impl RegistrationRepository for InMemoryRegistrations {
    async fn create(
        &self,
        registration: NewRegistration,
    ) -> Result<AdminRegistration, RegistrationRepositoryError> {
        self.check().map_err(RegistrationRepositoryError::DatabaseError)?;
        let mut rows = self.rows.lock().unwrap();
        if rows
            .iter()
            .any(|r| r.email == registration.email && r.status == ApprovalStatus::Pending)
        {
            return Err(RegistrationRepositoryError::EmailAlreadyPending);
        }

        let now = Utc::now();
        let created = AdminRegistration {
            id: Uuid::new_v4(),
            name: registration.name,
            email: registration.email,
            password_hash: registration.password_hash,
            is_admin: registration.is_admin,
            credential: registration.credential,
            status: ApprovalStatus::Pending,
            created_at: now,
            updated_at: now,
        };
        rows.push(created.clone());
        Ok(created)
    }

    async fn set_status(
        &self,
        id: Uuid,
        status: ApprovalStatus,
    ) -> Result<AdminRegistration, RegistrationRepositoryError> {
        self.check().map_err(RegistrationRepositoryError::DatabaseError)?;
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(RegistrationRepositoryError::NotFound)?;
        row.status = status;
        row.updated_at = Utc::now();
        Ok(row.clone())
    }

    async fn approve_and_materialize(
        &self,
        id: Uuid,
    ) -> Result<Materialization, RegistrationRepositoryError> {
        self.check().map_err(RegistrationRepositoryError::DatabaseError)?;
        let mut rows = self.rows.lock().unwrap();
        let mut users = self.users.rows.lock().unwrap();

        let index = rows
            .iter()
            .position(|r| r.id == id)
            .ok_or(RegistrationRepositoryError::NotFound)?;
        let registration = rows.remove(index);

        if let Some(existing) = users.iter().find(|u| u.email == registration.email) {
            return Ok(Materialization {
                user_id: existing.id,
                created: false,
            });
        }

        let now = Utc::now();
        let user = User {
            id: UserId::from(Uuid::new_v4()),
            name: registration.name,
            email: registration.email,
            password_hash: registration.password_hash,
            is_admin: registration.is_admin,
            is_verified: true,
            status: ApprovalStatus::Approved,
            credential: Some(registration.credential),
            profile_picture: None,
            created_at: now,
            updated_at: now,
        };
        let user_id = user.id;
        users.push(user);

        Ok(Materialization {
            user_id,
            created: true,
        })
    }
}

/// Upload table with an owner lookup into an [`InMemoryUsers`].
#[derive(Clone, Default)]
pub struct InMemoryUploads {
    rows: Arc<Mutex<Vec<Upload>>>,
    users: InMemoryUsers,
    broken: Option<String>,
}

impl InMemoryUploads {
    pub fn with(uploads: Vec<Upload>) -> Self {
        Self {
            rows: Arc::new(Mutex::new(uploads)),
            ..Default::default()
        }
    }

    pub fn broken(msg: &str) -> Self {
        Self {
            broken: Some(msg.to_string()),
            ..Default::default()
        }
    }

    pub fn owned_by(mut self, users: InMemoryUsers) -> Self {
        self.users = users;
        self
    }

    pub fn all(&self) -> Vec<Upload> {
        self.rows.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), String> {
        match &self.broken {
            Some(msg) => Err(msg.clone()),
            None => Ok(()),
        }
    }

    fn user_exists(&self, user_id: UserId) -> bool {
        self.users.all().iter().any(|u| u.id == user_id)
    }
}

#[async_trait]
impl UploadQuery for InMemoryUploads {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Upload>, UploadQueryError> {
        self.check().map_err(UploadQueryError::DatabaseError)?;
        Ok(self.all().into_iter().find(|u| u.id == id))
    }

    async fn list_pending(&self) -> Result<Vec<Upload>, UploadQueryError> {
        self.check().map_err(UploadQueryError::DatabaseError)?;
        Ok(self
            .all()
            .into_iter()
            .filter(|u| u.status == ApprovalStatus::Pending)
            .collect())
    }
}

#[async_trait]
impl UploadRepository for InMemoryUploads {
    async fn create(
        &self,
        file: StoredFile,
        owner: Option<UserId>,
    ) -> Result<Upload, UploadRepositoryError> {
        self.check().map_err(UploadRepositoryError::DatabaseError)?;
        if let Some(owner) = owner {
            if !self.user_exists(owner) {
                return Err(UploadRepositoryError::UserNotFound);
            }
        }

        let upload = Upload {
            id: Uuid::new_v4(),
            file,
            user_id: owner,
            status: ApprovalStatus::Pending,
            is_verified: false,
        };
        self.rows.lock().unwrap().push(upload.clone());
        Ok(upload)
    }

    async fn review(
        &self,
        id: Uuid,
        status: ApprovalStatus,
        owner: Option<UserId>,
    ) -> Result<Upload, UploadRepositoryError> {
        self.check().map_err(UploadRepositoryError::DatabaseError)?;
        let mut rows = self.rows.lock().unwrap();
        let mut users = self.users.rows.lock().unwrap();

        let upload = rows
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(UploadRepositoryError::UploadNotFound)?;

        // Validate everything before touching either table.
        let owner_id = owner.or(upload.user_id);
        let owner_index = match owner_id {
            Some(user_id) => Some(
                users
                    .iter()
                    .position(|u| u.id == user_id)
                    .ok_or(UploadRepositoryError::UserNotFound)?,
            ),
            None => None,
        };

        let verified = status.grants_verification();
        upload.user_id = owner_id;
        upload.status = status;
        upload.is_verified = verified;

        if let Some(index) = owner_index {
            users[index].is_verified = verified;
            users[index].updated_at = Utc::now();
        }

        Ok(upload.clone())
    }

    async fn link_owner(&self, id: Uuid, owner: UserId) -> Result<Upload, UploadRepositoryError> {
        self.check().map_err(UploadRepositoryError::DatabaseError)?;
        if !self.user_exists(owner) {
            return Err(UploadRepositoryError::UserNotFound);
        }

        let mut rows = self.rows.lock().unwrap();
        let upload = rows
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(UploadRepositoryError::UploadNotFound)?;
        upload.user_id = Some(owner);
        Ok(upload.clone())
    }
}

#[derive(Clone, Default)]
pub struct InMemoryJobs {
    rows: Arc<Mutex<Vec<Job>>>,
    broken: Option<String>,
}

impl InMemoryJobs {
    pub fn with(jobs: Vec<Job>) -> Self {
        Self {
            rows: Arc::new(Mutex::new(jobs)),
            broken: None,
        }
    }

    pub fn broken(msg: &str) -> Self {
        Self {
            rows: Arc::default(),
            broken: Some(msg.to_string()),
        }
    }

    pub fn all(&self) -> Vec<Job> {
        self.rows.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), String> {
        match &self.broken {
            Some(msg) => Err(msg.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl JobQuery for InMemoryJobs {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Job>, JobQueryError> {
        self.check().map_err(JobQueryError::DatabaseError)?;
        Ok(self.all().into_iter().find(|j| j.id == id))
    }

    async fn list(&self, category: Option<&str>) -> Result<Vec<Job>, JobQueryError> {
        self.check().map_err(JobQueryError::DatabaseError)?;
        let mut jobs: Vec<Job> = self
            .all()
            .into_iter()
            .filter(|j| category.map_or(true, |c| j.category == c))
            .collect();
        jobs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(jobs)
    }

    async fn count_by_category(&self) -> Result<Vec<CategoryCount>, JobQueryError> {
        self.check().map_err(JobQueryError::DatabaseError)?;
        let mut counts: Vec<CategoryCount> = Vec::new();
        for job in self.all() {
            match counts.iter_mut().find(|c| c.category == job.category) {
                Some(c) => c.count += 1,
                None => counts.push(CategoryCount {
                    category: job.category,
                    count: 1,
                }),
            }
        }
        Ok(counts)
    }
}

#[async_trait]
impl JobRepository for InMemoryJobs {
    async fn create(&self, draft: JobDraft) -> Result<Job, JobRepositoryError> {
        self.check().map_err(JobRepositoryError::DatabaseError)?;
        let now = Utc::now();
        let job = Job {
            id: Uuid::new_v4(),
            title: draft.title,
            company: draft.company,
            category: draft.category,
            location: draft.location,
            description: draft.description,
            salary: draft.salary,
            created_at: now,
            updated_at: now,
        };
        self.rows.lock().unwrap().push(job.clone());
        Ok(job)
    }

    async fn update(&self, id: Uuid, draft: JobDraft) -> Result<Job, JobRepositoryError> {
        self.check().map_err(JobRepositoryError::DatabaseError)?;
        let mut rows = self.rows.lock().unwrap();
        let job = rows
            .iter_mut()
            .find(|j| j.id == id)
            .ok_or(JobRepositoryError::NotFound)?;

        job.title = draft.title;
        job.company = draft.company;
        job.category = draft.category;
        job.location = draft.location;
        job.description = draft.description;
        job.salary = draft.salary;
        job.updated_at = Utc::now();
        Ok(job.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), JobRepositoryError> {
        self.check().map_err(JobRepositoryError::DatabaseError)?;
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|j| j.id != id);
        if rows.len() == before {
            return Err(JobRepositoryError::NotFound);
        }
        Ok(())
    }
}
