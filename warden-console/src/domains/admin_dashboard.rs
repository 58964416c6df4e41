//! Role summary dashboard: read-only view of users grouped by role.

use std::sync::Arc;

use log::{error, info};
use warden_core::RoleBuckets;

use crate::infrastructure::services::user_management::UserAdminService;

pub struct AdminDashboard {
    service: Arc<dyn UserAdminService>,
    pub buckets: RoleBuckets,
    pub loading: bool,
    /// Whether the most recent fetch failed; buckets then hold the
    /// previous snapshot.
    pub load_failed: bool,
}

impl std::fmt::Debug for AdminDashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminDashboard")
            .field("buckets", &self.buckets)
            .field("loading", &self.loading)
            .field("load_failed", &self.load_failed)
            .finish()
    }
}

impl AdminDashboard {
    /// New dashboard in the loading state; nothing is fetched until
    /// [`AdminDashboard::load`].
    pub fn new(service: Arc<dyn UserAdminService>) -> Self {
        Self {
            service,
            buckets: RoleBuckets::default(),
            loading: true,
            load_failed: false,
        }
    }

    pub async fn load(&mut self) {
        self.loading = true;
        match self.service.list_users().await {
            Ok(users) => {
                self.buckets = RoleBuckets::partition(&users);
                self.load_failed = false;
                info!(
                    "Dashboard loaded {} of {} users into role buckets",
                    self.buckets.total(),
                    users.len()
                );
            }
            Err(err) => {
                error!("Failed to fetch users: {:#}", err);
                self.load_failed = true;
            }
        }
        self.loading = false;
    }
}
