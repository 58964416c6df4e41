use crate::ids::UserId;
use crate::permissions::Permissions;
use crate::role::Role;
use crate::status::UserStatus;

/// A user record as stored by the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: UserStatus,
    #[cfg_attr(feature = "serde", serde(default))]
    pub permissions: Permissions,
}

impl User {
    pub fn new(
        id: impl Into<UserId>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
        status: UserStatus,
        permissions: Permissions,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role,
            status,
            permissions,
        }
    }
}
