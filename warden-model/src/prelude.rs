//! Convenience re-exports for downstream crates.

pub use crate::error::{ModelError, Result as ModelResult};
pub use crate::ids::UserId;
pub use crate::permissions::Permissions;
pub use crate::role::Role;
pub use crate::status::UserStatus;
pub use crate::user::User;
