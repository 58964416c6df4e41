//! Role policy table
//!
//! Each role maps to a fixed read/write/delete triple. The table is the
//! only place permissions are derived from; once a record is saved its
//! permissions are stored data and are not recomputed.
//!
//! | role   | read | write | delete |
//! |--------|------|-------|--------|
//! | Admin  | yes  | yes   | yes    |
//! | Editor | yes  | yes   | no     |
//! | Viewer | yes  | no    | no     |
//!
//! Any other role grants nothing.

use warden_model::{Permissions, Role};

/// Permissions granted by `role`.
pub fn permissions_for(role: &Role) -> Permissions {
    match role {
        Role::Admin => Permissions::new(true, true, true),
        Role::Editor => Permissions::new(true, true, false),
        Role::Viewer => Permissions::new(true, false, false),
        Role::Other(_) => Permissions::NONE,
    }
}

/// Lookup by exact role name, as it appears in the role selector.
pub fn permissions_for_name(name: &str) -> Permissions {
    match name {
        "Admin" => permissions_for(&Role::Admin),
        "Editor" => permissions_for(&Role::Editor),
        "Viewer" => permissions_for(&Role::Viewer),
        _ => Permissions::NONE,
    }
}

/// Roles offered by the role selector.
pub fn assignable_roles() -> &'static [Role] {
    Role::assignable()
}
