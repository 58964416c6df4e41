use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use warden_core::api_routes::users;
use warden_model::{User, UserId};

use crate::infrastructure::api_client::ApiClient;

/// The four operations the console needs from the user backend.
///
/// Errors are opaque: callers log them and surface a notice, without
/// distinguishing network, validation or not-found failures.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserAdminService: Send + Sync {
    /// Full snapshot of all users.
    async fn list_users(&self) -> Result<Vec<User>>;
    /// Create a record whose id was assigned by the caller. Backends that
    /// answer without a body get the sent record back.
    async fn add_user(&self, user: &User) -> Result<User>;
    /// Replace the record stored under `id`.
    async fn update_user(&self, id: &UserId, user: &User) -> Result<User>;
    async fn delete_user(&self, id: &UserId) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct UserAdminApiAdapter {
    client: Arc<ApiClient>,
}

impl UserAdminApiAdapter {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl UserAdminService for UserAdminApiAdapter {
    async fn list_users(&self) -> Result<Vec<User>> {
        self.client.get(users::COLLECTION).await
    }

    async fn add_user(&self, user: &User) -> Result<User> {
        let created = self.client.post(users::COLLECTION, user).await?;
        Ok(created.unwrap_or_else(|| user.clone()))
    }

    async fn update_user(&self, id: &UserId, user: &User) -> Result<User> {
        let url = self.client.item_url(users::COLLECTION, id.as_str())?;
        let updated = self.client.put(&url, user).await?;
        Ok(updated.unwrap_or_else(|| user.clone()))
    }

    async fn delete_user(&self, id: &UserId) -> Result<()> {
        let url = self.client.item_url(users::COLLECTION, id.as_str())?;
        self.client.delete(&url).await
    }
}
