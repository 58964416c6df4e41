//! User management domain
//!
//! Owns the cached user list, the draft form and the table settings, and
//! drives create/update/delete against the [`UserAdminService`]. The cache
//! is never patched locally: every successful mutation is followed by a
//! full reload, and the cache only changes when a reload succeeds.

pub mod messages;
pub mod update;

use std::fmt;
use std::sync::Arc;

use log::{error, info};
use warden_core::{DerivedView, DraftError, DraftForm, SortConfig, StatusFilter, derive_view};
use warden_model::{User, UserId};

use crate::infrastructure::services::user_management::UserAdminService;

/// Failure shown to the user after an operation did not go through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    LoadFailed(String),
    SubmitFailed(String),
    DeleteFailed(String),
    InvalidDraft(DraftError),
}

impl Notice {
    pub fn headline(&self) -> &'static str {
        match self {
            Notice::LoadFailed(_) => "Failed to load users",
            Notice::SubmitFailed(_) => "There was an issue submitting the form",
            Notice::DeleteFailed(_) => "Failed to delete user",
            Notice::InvalidDraft(_) => "Please complete the form",
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::LoadFailed(detail)
            | Notice::SubmitFailed(detail)
            | Notice::DeleteFailed(detail) => {
                write!(f, "{}: {}", self.headline(), detail)
            }
            Notice::InvalidDraft(err) => write!(f, "{}: {}", self.headline(), err),
        }
    }
}

/// User management domain state
#[derive(Debug, Clone, Default)]
pub struct UserManagementState {
    /// Last snapshot fetched from the backend
    pub users: Vec<User>,
    pub draft: DraftForm,
    pub sort: SortConfig,
    pub status_filter: StatusFilter,
    pub search_query: String,
    pub notice: Option<Notice>,
    /// A mutation went through but no reload has succeeded since, so
    /// `users` may not reflect the backend
    pub stale: bool,
}

impl UserManagementState {
    /// Rows of the user table for the current settings.
    pub fn view(&self) -> DerivedView<'_> {
        derive_view(
            &self.users,
            &self.sort,
            self.status_filter,
            &self.search_query,
        )
    }
}

pub struct UserManagementDomain {
    service: Arc<dyn UserAdminService>,
    pub state: UserManagementState,
}

impl fmt::Debug for UserManagementDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserManagementDomain")
            .field("state", &self.state)
            .finish()
    }
}

impl UserManagementDomain {
    pub fn new(service: Arc<dyn UserAdminService>) -> Self {
        Self {
            service,
            state: UserManagementState::default(),
        }
    }

    pub fn with_sort(mut self, sort: SortConfig) -> Self {
        self.state.sort = sort;
        self
    }

    pub fn view(&self) -> DerivedView<'_> {
        self.state.view()
    }

    pub fn draft(&self) -> &DraftForm {
        &self.state.draft
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.state.notice.as_ref()
    }

    pub fn is_stale(&self) -> bool {
        self.state.stale
    }

    pub fn find_user(&self, id: &UserId) -> Option<&User> {
        self.state.users.iter().find(|user| &user.id == id)
    }

    /// Replace the cache with a fresh snapshot. On failure the previous
    /// snapshot stays in place.
    pub async fn reload(&mut self) -> Result<(), Notice> {
        match self.service.list_users().await {
            Ok(users) => {
                info!("Successfully loaded {} users", users.len());
                self.state.users = users;
                self.state.stale = false;
                Ok(())
            }
            Err(err) => {
                error!("Error fetching users: {:#}", err);
                Err(self.raise(Notice::LoadFailed(err.to_string())))
            }
        }
    }

    /// Send the draft to the backend: create when it has no id, update
    /// otherwise. Returns the id the record was stored under.
    ///
    /// The draft is submitted as-is, permissions included; they are not
    /// re-derived from the role here. On failure the draft is untouched.
    pub async fn submit(&mut self) -> Result<UserId, Notice> {
        let mut record = match self.state.draft.to_record() {
            Ok(record) => record,
            Err(err) => {
                info!("Draft rejected: {}", err);
                return Err(self.raise(Notice::InvalidDraft(err)));
            }
        };

        let result = if record.id.is_empty() {
            record.id = UserId::generate();
            info!("Creating user {} ({})", record.name, record.id);
            self.service.add_user(&record).await
        } else {
            info!("Updating user {} ({})", record.name, record.id);
            self.service.update_user(&record.id, &record).await
        };

        if let Err(err) = result {
            error!("Error submitting form: {:#}", err);
            return Err(self.raise(Notice::SubmitFailed(err.to_string())));
        }

        self.state.draft.reset();
        self.invalidate_and_reload().await;
        Ok(record.id)
    }

    pub async fn remove(&mut self, id: &UserId) -> Result<(), Notice> {
        info!("Deleting user: {}", id);
        if let Err(err) = self.service.delete_user(id).await {
            error!("Error deleting user {}: {:#}", id, err);
            return Err(self.raise(Notice::DeleteFailed(err.to_string())));
        }
        self.invalidate_and_reload().await;
        Ok(())
    }

    pub fn edit_requested(&mut self, user: &User) {
        self.state.draft.begin_edit(user);
    }

    /// The mutation went through, so the cache is stale until a reload
    /// lands. A failed reload leaves the mutation committed and the cache
    /// marked stale behind a load notice.
    async fn invalidate_and_reload(&mut self) {
        self.state.notice = None;
        self.state.stale = true;
        let _ = self.reload().await;
    }

    fn raise(&mut self, notice: Notice) -> Notice {
        self.state.notice = Some(notice.clone());
        notice
    }
}
