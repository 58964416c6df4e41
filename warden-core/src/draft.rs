//! Draft form state for creating and editing user records.
//!
//! The draft is a staging copy of a [`User`]. An empty id means the draft
//! will create a new record; a non-empty id means it edits that record.
//! Permissions are never edited directly: [`DraftForm::select_role`] looks
//! them up in the role policy table and stores the result on the draft,
//! while [`DraftForm::begin_edit`] carries over whatever the stored record
//! already had.

use tracing::debug;
use warden_model::{Permissions, Role, User, UserId, UserStatus};

use crate::rbac::permissions_for;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftMode {
    Create,
    Edit,
}

/// Reasons a draft cannot be submitted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("name is required")]
    MissingName,
    #[error("email is required")]
    MissingEmail,
    #[error("{0:?} is not an email address")]
    InvalidEmail(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DraftForm {
    id: UserId,
    name: String,
    email: String,
    role: Option<Role>,
    status: UserStatus,
    permissions: Permissions,
}

impl DraftForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn role(&self) -> Option<&Role> {
        self.role.as_ref()
    }

    pub fn status(&self) -> UserStatus {
        self.status
    }

    pub fn permissions(&self) -> Permissions {
        self.permissions
    }

    pub fn mode(&self) -> DraftMode {
        if self.id.is_empty() {
            DraftMode::Create
        } else {
            DraftMode::Edit
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode() {
            DraftMode::Create => "Add User",
            DraftMode::Edit => "Update User",
        }
    }

    /// Email is fixed once a record exists; front ends disable the field.
    pub fn email_locked(&self) -> bool {
        self.mode() == DraftMode::Edit
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_status(&mut self, status: UserStatus) {
        self.status = status;
    }

    /// Set the role and store the permissions it grants. Clearing the
    /// selection stores no permissions.
    pub fn select_role(&mut self, role: Option<Role>) {
        self.permissions = role.as_ref().map(permissions_for).unwrap_or_default();
        debug!(role = ?role, permissions = %self.permissions, "draft role selected");
        self.role = role;
    }

    /// Load an existing record as-is, stored permissions included.
    pub fn begin_edit(&mut self, user: &User) {
        debug!(id = %user.id, "editing user");
        *self = DraftForm {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            role: Some(user.role.clone()),
            status: user.status,
            permissions: user.permissions,
        };
    }

    /// Back to an empty create-mode draft.
    pub fn reset(&mut self) {
        *self = DraftForm::default();
    }

    pub fn validate(&self) -> Result<(), DraftError> {
        if self.name.trim().is_empty() {
            return Err(DraftError::MissingName);
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(DraftError::MissingEmail);
        }
        if !looks_like_email(email) {
            return Err(DraftError::InvalidEmail(self.email.clone()));
        }
        Ok(())
    }

    /// The record this draft would submit. The id is left empty in create
    /// mode; assigning one is up to the caller. Without a selected role the
    /// record carries an empty role name and no permissions.
    pub fn to_record(&self) -> Result<User, DraftError> {
        self.validate()?;
        let role = self
            .role
            .clone()
            .unwrap_or_else(|| Role::Other(String::new()));
        Ok(User {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            role,
            status: self.status,
            permissions: self.permissions,
        })
    }
}

/// `local@domain` with no whitespace, the shape browsers accept for an
/// email input.
fn looks_like_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !domain.contains('@')
        }
        None => false,
    }
}
