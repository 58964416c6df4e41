//! Role summary shown on the admin dashboard.

use tracing::debug;
use warden_model::{Role, User};

/// Users grouped by role, each bucket in input order.
///
/// Matching is a case-insensitive comparison of the role name, so a record
/// whose role is none of admin/editor/viewer lands in no bucket at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleBuckets {
    pub admins: Vec<User>,
    pub editors: Vec<User>,
    pub viewers: Vec<User>,
}

impl RoleBuckets {
    pub fn partition(users: &[User]) -> Self {
        let mut buckets = RoleBuckets::default();
        let mut dropped = 0usize;

        for user in users {
            let role = user.role.as_str();
            if role.eq_ignore_ascii_case("admin") {
                buckets.admins.push(user.clone());
            } else if role.eq_ignore_ascii_case("editor") {
                buckets.editors.push(user.clone());
            } else if role.eq_ignore_ascii_case("viewer") {
                buckets.viewers.push(user.clone());
            } else {
                dropped += 1;
            }
        }

        if dropped > 0 {
            debug!(dropped, "users with unrecognized roles left out of dashboard");
        }
        buckets
    }

    /// Bucket for one of the three known roles.
    pub fn bucket(&self, role: &Role) -> &[User] {
        match role {
            Role::Admin => &self.admins,
            Role::Editor => &self.editors,
            Role::Viewer => &self.viewers,
            Role::Other(_) => &[],
        }
    }

    pub fn total(&self) -> usize {
        self.admins.len() + self.editors.len() + self.viewers.len()
    }

    /// `(title, empty-state text, members)` in dashboard order.
    pub fn sections(&self) -> [(&'static str, &'static str, &[User]); 3] {
        [
            ("Admins", "No Admins found.", self.admins.as_slice()),
            ("Editors", "No Editors found.", self.editors.as_slice()),
            ("Viewers", "No Viewers found.", self.viewers.as_slice()),
        ]
    }
}
