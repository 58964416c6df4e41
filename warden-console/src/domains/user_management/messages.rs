use warden_core::{SortConfig, SortKey, StatusFilter};
use warden_model::{Role, User, UserId, UserStatus};

#[derive(Clone, Debug)]
pub enum Message {
    // Backend round trips
    LoadUsers,
    Submit,
    DeleteUser(UserId),

    // Draft form
    EditUser(User),
    NameChanged(String),
    EmailChanged(String),
    StatusChanged(UserStatus),
    RoleSelected(Option<Role>),
    ResetDraft,

    // Table
    SortBy(SortKey),
    SortChanged(SortConfig),
    StatusFilterChanged(StatusFilter),
    SearchChanged(String),

    DismissNotice,
}

impl Message {
    pub fn name(&self) -> &'static str {
        match self {
            Self::LoadUsers => "UserManagement::LoadUsers",
            Self::Submit => "UserManagement::Submit",
            Self::DeleteUser(_) => "UserManagement::DeleteUser",
            Self::EditUser(_) => "UserManagement::EditUser",
            Self::NameChanged(_) => "UserManagement::NameChanged",
            Self::EmailChanged(_) => "UserManagement::EmailChanged",
            Self::StatusChanged(_) => "UserManagement::StatusChanged",
            Self::RoleSelected(_) => "UserManagement::RoleSelected",
            Self::ResetDraft => "UserManagement::ResetDraft",
            Self::SortBy(_) => "UserManagement::SortBy",
            Self::SortChanged(_) => "UserManagement::SortChanged",
            Self::StatusFilterChanged(_) => "UserManagement::StatusFilterChanged",
            Self::SearchChanged(_) => "UserManagement::SearchChanged",
            Self::DismissNotice => "UserManagement::DismissNotice",
        }
    }

    /// Whether handling the message waits on the backend.
    pub fn is_round_trip(&self) -> bool {
        matches!(self, Self::LoadUsers | Self::Submit | Self::DeleteUser(_))
    }
}
