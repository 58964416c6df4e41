//! In-memory stand-in for the user backend
//!
//! Backs the `--offline` console mode and the scenario tests. Every call is
//! recorded so tests can assert exactly what the controller sent, and any
//! operation can be made to fail on demand.

use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use anyhow::Result;
use async_trait::async_trait;
use warden_core::permissions_for;
use warden_model::{Role, User, UserId, UserStatus};

use crate::infrastructure::repository::RepositoryError;
use crate::infrastructure::services::user_management::UserAdminService;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceOperation {
    List,
    Add,
    Update,
    Delete,
}

/// A call received by [`TestUserAdminService`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceCall {
    List,
    Add(User),
    Update(UserId, User),
    Delete(UserId),
}

impl ServiceCall {
    pub fn operation(&self) -> ServiceOperation {
        match self {
            ServiceCall::List => ServiceOperation::List,
            ServiceCall::Add(_) => ServiceOperation::Add,
            ServiceCall::Update(..) => ServiceOperation::Update,
            ServiceCall::Delete(_) => ServiceOperation::Delete,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TestUserAdminService {
    inner: Arc<RwLock<InnerState>>,
}

#[derive(Debug, Default)]
struct InnerState {
    users: Vec<User>,
    calls: Vec<ServiceCall>,
    failing: HashSet<ServiceOperation>,
}

impl TestUserAdminService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: Vec<User>) -> Self {
        let service = Self::default();
        service.set_users(users);
        service
    }

    /// Sample directory used by offline mode.
    pub fn seeded() -> Self {
        let sample = |id: &str, name: &str, email: &str, role: Role, status| {
            let permissions = permissions_for(&role);
            User::new(id, name, email, role, status, permissions)
        };
        Self::with_users(vec![
            sample("1", "Alice Johnson", "alice@example.com", Role::Admin, UserStatus::Active),
            sample("2", "Bob Smith", "bob@example.com", Role::Editor, UserStatus::Active),
            sample("3", "Carol White", "carol@example.com", Role::Viewer, UserStatus::Inactive),
            sample("4", "Dan Brown", "dan@example.com", Role::Viewer, UserStatus::Active),
        ])
    }

    pub fn set_users(&self, users: Vec<User>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.users = users;
        }
    }

    /// Current contents of the store.
    pub fn users(&self) -> Vec<User> {
        self.inner
            .read()
            .map(|guard| guard.users.clone())
            .unwrap_or_default()
    }

    pub fn calls(&self) -> Vec<ServiceCall> {
        self.inner
            .read()
            .map(|guard| guard.calls.clone())
            .unwrap_or_default()
    }

    pub fn clear_calls(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.calls.clear();
        }
    }

    /// Make every subsequent `operation` fail until [`Self::recover`].
    pub fn fail_on(&self, operation: ServiceOperation) {
        if let Ok(mut guard) = self.inner.write() {
            guard.failing.insert(operation);
        }
    }

    pub fn recover(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.failing.clear();
        }
    }

    fn with_state<T>(
        &self,
        call: ServiceCall,
        f: impl FnOnce(&mut Vec<User>) -> Result<T, RepositoryError>,
    ) -> Result<T> {
        let mut guard = self
            .inner
            .write()
            .map_err(|e| RepositoryError::LockError(e.to_string()))?;
        let operation = call.operation();
        guard.calls.push(call);
        if guard.failing.contains(&operation) {
            return Err(RepositoryError::QueryFailed(format!(
                "injected failure for {operation:?}"
            ))
            .into());
        }
        Ok(f(&mut guard.users)?)
    }
}

#[async_trait]
impl UserAdminService for TestUserAdminService {
    async fn list_users(&self) -> Result<Vec<User>> {
        self.with_state(ServiceCall::List, |users| Ok(users.clone()))
    }

    async fn add_user(&self, user: &User) -> Result<User> {
        self.with_state(ServiceCall::Add(user.clone()), |users| {
            if users.iter().any(|existing| existing.id == user.id) {
                return Err(RepositoryError::Conflict {
                    entity_type: "User".to_string(),
                    id: user.id.to_string(),
                });
            }
            users.push(user.clone());
            Ok(user.clone())
        })
    }

    async fn update_user(&self, id: &UserId, user: &User) -> Result<User> {
        self.with_state(ServiceCall::Update(id.clone(), user.clone()), |users| {
            let slot = users
                .iter_mut()
                .find(|existing| &existing.id == id)
                .ok_or_else(|| RepositoryError::user_not_found(id.as_str()))?;
            *slot = user.clone();
            Ok(user.clone())
        })
    }

    async fn delete_user(&self, id: &UserId) -> Result<()> {
        self.with_state(ServiceCall::Delete(id.clone()), |users| {
            let before = users.len();
            users.retain(|existing| &existing.id != id);
            if users.len() == before {
                return Err(RepositoryError::user_not_found(id.as_str()));
            }
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use warden_model::Permissions;

    fn user(id: &str) -> User {
        User::new(id, "N", "n@x.com", Role::Viewer, UserStatus::Active, Permissions::NONE)
    }

    #[tokio::test]
    async fn rejects_duplicate_ids_and_missing_records() {
        let service = TestUserAdminService::with_users(vec![user("1")]);
        assert!(service.add_user(&user("1")).await.is_err());
        assert!(service.update_user(&"9".into(), &user("9")).await.is_err());
        assert!(service.delete_user(&"9".into()).await.is_err());
        assert_eq!(service.users(), vec![user("1")]);
        assert_eq!(service.calls().len(), 3);
    }

    #[tokio::test]
    async fn injected_failures_are_recorded_and_recoverable() {
        let service = TestUserAdminService::seeded();
        service.fail_on(ServiceOperation::List);
        assert!(service.list_users().await.is_err());
        service.recover();
        assert_eq!(service.list_users().await.unwrap().len(), 4);
        assert_eq!(service.calls(), vec![ServiceCall::List, ServiceCall::List]);
    }
}
