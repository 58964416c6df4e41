use std::fmt::{self, Display};
use std::str::FromStr;

use crate::error::ModelError;

/// Role assigned to a user record.
///
/// The three known roles are matched case-insensitively at the boundary.
/// Anything else the backend hands us is kept verbatim in [`Role::Other`]
/// so that it survives a read-modify-write cycle untouched; such records
/// receive no permissions and do not appear in any dashboard bucket.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Role {
    /// Read, write and delete
    Admin,
    /// Read and write
    Editor,
    /// Read only
    Viewer,
    /// Unrecognized role name, passed through unchanged
    Other(String),
}

impl Role {
    /// Roles that can be picked from the role selector, in display order.
    pub fn assignable() -> &'static [Role] {
        &[Role::Admin, Role::Viewer, Role::Editor]
    }

    /// Lenient conversion used for values arriving from the backend. Only
    /// an exact case-insensitive match is recognized; padded or otherwise
    /// unusual names are kept verbatim as [`Role::Other`].
    pub fn from_wire(raw: &str) -> Self {
        Self::known(raw).unwrap_or_else(|| Role::Other(raw.to_string()))
    }

    fn known(name: &str) -> Option<Self> {
        [Role::Admin, Role::Editor, Role::Viewer]
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(name))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Role::Admin => "Admin",
            Role::Editor => "Editor",
            Role::Viewer => "Viewer",
            Role::Other(raw) => raw,
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict parse of typed input: only the three known roles are accepted,
/// surrounding whitespace is ignored.
impl FromStr for Role {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::known(s.trim()).ok_or_else(|| ModelError::InvalidRole(s.to_string()))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Role {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Role::from_wire(&raw))
    }
}
