//! Core data model definitions shared across Warden crates.
#![allow(missing_docs)]

pub mod error;
pub mod ids;
pub mod permissions;
pub mod prelude;
pub mod role;
pub mod status;
pub mod user;

pub use error::{ModelError, Result as ModelResult};
pub use ids::UserId;
pub use permissions::Permissions;
pub use role::Role;
pub use status::UserStatus;
pub use user::User;
