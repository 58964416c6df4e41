use log::{debug, info};

use super::UserManagementDomain;
use super::messages::Message;

impl UserManagementDomain {
    /// Handle a user management message. Backend round trips are awaited
    /// in place; failures end up in `state.notice`.
    pub async fn update(&mut self, message: Message) {
        if message.is_round_trip() {
            info!("User management update: {}", message.name());
        } else {
            debug!("User management update: {}", message.name());
        }

        match message {
            Message::LoadUsers => {
                let _ = self.reload().await;
            }
            Message::Submit => {
                let _ = self.submit().await;
            }
            Message::DeleteUser(id) => {
                let _ = self.remove(&id).await;
            }

            Message::EditUser(user) => self.edit_requested(&user),
            Message::NameChanged(name) => self.state.draft.set_name(name),
            Message::EmailChanged(email) => self.state.draft.set_email(email),
            Message::StatusChanged(status) => self.state.draft.set_status(status),
            Message::RoleSelected(role) => self.state.draft.select_role(role),
            Message::ResetDraft => self.state.draft.reset(),

            Message::SortBy(key) => self.state.sort.toggle(key),
            Message::SortChanged(sort) => self.state.sort = sort,
            Message::StatusFilterChanged(filter) => {
                self.state.status_filter = filter;
            }
            Message::SearchChanged(query) => self.state.search_query = query,

            Message::DismissNotice => self.state.notice = None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use anyhow::anyhow;
    use mockall::Sequence;
    use warden_core::{DraftError, SortDirection, SortKey};
    use warden_model::{Permissions, Role, User, UserStatus};

    use super::*;
    use crate::domains::user_management::Notice;
    use crate::infrastructure::services::user_management::MockUserAdminService;

    fn stored(id: &str, name: &str, role: Role) -> User {
        let permissions = warden_core::permissions_for(&role);
        User::new(
            id,
            name,
            format!("{}@x.com", name.to_lowercase()),
            role,
            UserStatus::Active,
            permissions,
        )
    }

    fn domain(mock: MockUserAdminService) -> UserManagementDomain {
        UserManagementDomain::new(Arc::new(mock))
    }

    #[tokio::test]
    async fn failed_reload_keeps_stale_list() {
        let mut mock = MockUserAdminService::new();
        let mut seq = Sequence::new();
        mock.expect_list_users()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(vec![stored("1", "Ann", Role::Admin)]));
        mock.expect_list_users()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Err(anyhow!("connection refused")));

        let mut domain = domain(mock);
        domain.update(Message::LoadUsers).await;
        assert_eq!(domain.state.users.len(), 1);
        assert!(domain.notice().is_none());

        domain.update(Message::LoadUsers).await;
        assert_eq!(domain.state.users.len(), 1);
        assert!(matches!(domain.notice(), Some(Notice::LoadFailed(_))));
        // No mutation happened, so the old snapshot is not marked stale.
        assert!(!domain.is_stale());
    }

    #[tokio::test]
    async fn failed_create_leaves_draft_and_skips_reload() {
        let mut mock = MockUserAdminService::new();
        mock.expect_add_user()
            .times(1)
            .returning(|_| Err(anyhow!("email already taken")));
        mock.expect_list_users().never();

        let mut domain = domain(mock);
        domain.update(Message::NameChanged("Sam".into())).await;
        domain.update(Message::EmailChanged("sam@x.com".into())).await;
        domain.update(Message::RoleSelected(Some(Role::Editor))).await;
        let before = domain.draft().clone();

        domain.update(Message::Submit).await;
        assert_eq!(domain.draft(), &before);
        assert!(domain.draft().id().is_empty());
        match domain.notice() {
            Some(Notice::SubmitFailed(detail)) => assert!(detail.contains("email already taken")),
            other => panic!("unexpected notice: {other:?}"),
        }
    }

    #[tokio::test]
    async fn failed_update_leaves_edit_draft() {
        let user = stored("7", "Vic", Role::Viewer);
        let mut mock = MockUserAdminService::new();
        mock.expect_update_user()
            .withf(|id, record| id.as_str() == "7" && record.name == "Victor")
            .times(1)
            .returning(|_, _| Err(anyhow!("500")));
        mock.expect_list_users().never();

        let mut domain = domain(mock);
        domain.update(Message::EditUser(user)).await;
        domain.update(Message::NameChanged("Victor".into())).await;
        domain.update(Message::Submit).await;

        assert_eq!(domain.draft().id().as_str(), "7");
        assert_eq!(domain.draft().name(), "Victor");
        assert!(matches!(domain.notice(), Some(Notice::SubmitFailed(_))));
    }

    #[tokio::test]
    async fn invalid_draft_never_reaches_backend() {
        let mut mock = MockUserAdminService::new();
        mock.expect_add_user().never();
        mock.expect_update_user().never();

        let mut domain = domain(mock);
        domain.update(Message::NameChanged("Sam".into())).await;
        domain.update(Message::Submit).await;
        assert!(matches!(domain.notice(), Some(Notice::InvalidDraft(_))));

        domain.update(Message::DismissNotice).await;
        assert!(domain.notice().is_none());
    }

    #[tokio::test]
    async fn draft_without_role_is_created_with_empty_role() {
        let mut mock = MockUserAdminService::new();
        mock.expect_add_user()
            .withf(|record| {
                record.role == Role::Other(String::new())
                    && record.permissions == Permissions::NONE
                    && !record.id.is_empty()
            })
            .times(1)
            .returning(|record| Ok(record.clone()));
        mock.expect_list_users().times(1).returning(|| Ok(Vec::new()));

        let mut domain = domain(mock);
        domain.update(Message::NameChanged("Sam".into())).await;
        domain.update(Message::EmailChanged("sam@x.com".into())).await;
        domain.update(Message::Submit).await;
        assert!(domain.notice().is_none(), "{:?}", domain.notice());
    }

    #[tokio::test]
    async fn malformed_email_never_reaches_backend() {
        let mut mock = MockUserAdminService::new();
        mock.expect_add_user().never();

        let mut domain = domain(mock);
        domain.update(Message::NameChanged("Sam".into())).await;
        domain.update(Message::EmailChanged("sam.x.com".into())).await;
        domain.update(Message::Submit).await;
        assert!(matches!(
            domain.notice(),
            Some(Notice::InvalidDraft(DraftError::InvalidEmail(_)))
        ));
    }

    #[tokio::test]
    async fn failed_delete_keeps_cache() {
        let mut mock = MockUserAdminService::new();
        mock.expect_list_users()
            .times(1)
            .returning(|| Ok(vec![stored("1", "Ann", Role::Admin)]));
        mock.expect_delete_user()
            .times(1)
            .returning(|_| Err(anyhow!("not found")));

        let mut domain = domain(mock);
        domain.update(Message::LoadUsers).await;
        domain.update(Message::DeleteUser("ghost".into())).await;

        assert_eq!(domain.state.users.len(), 1);
        assert!(matches!(domain.notice(), Some(Notice::DeleteFailed(_))));
    }

    #[tokio::test]
    async fn successful_mutation_clears_previous_notice() {
        let mut mock = MockUserAdminService::new();
        mock.expect_delete_user().times(1).returning(|_| Ok(()));
        mock.expect_list_users().times(1).returning(|| Ok(Vec::new()));

        let mut domain = domain(mock);
        domain.state.notice = Some(Notice::DeleteFailed("earlier".into()));
        domain.update(Message::DeleteUser("1".into())).await;
        assert!(domain.notice().is_none());
    }

    #[tokio::test]
    async fn table_messages_update_settings() {
        let mut domain = domain(MockUserAdminService::new());
        domain.update(Message::SortBy(SortKey::Name)).await;
        assert_eq!(domain.state.sort.direction, SortDirection::Descending);
        domain.update(Message::SortBy(SortKey::Email)).await;
        assert_eq!(domain.state.sort.key, SortKey::Email);
        assert_eq!(domain.state.sort.direction, SortDirection::Ascending);

        domain
            .update(Message::StatusFilterChanged(warden_core::StatusFilter::Only(
                UserStatus::Inactive,
            )))
            .await;
        domain.update(Message::SearchChanged("ann".into())).await;
        assert_eq!(domain.state.search_query, "ann");
        assert!(domain.view().is_empty());
    }

    #[tokio::test]
    async fn edit_then_reset_returns_to_create_mode() {
        let mut domain = domain(MockUserAdminService::new());
        domain
            .update(Message::EditUser(stored("3", "Eve", Role::Editor)))
            .await;
        assert_eq!(domain.draft().permissions(), Permissions::new(true, true, false));
        domain.update(Message::ResetDraft).await;
        assert!(domain.draft().id().is_empty());
    }
}
