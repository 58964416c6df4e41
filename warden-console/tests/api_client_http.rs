//! Drives the real HTTP adapter against a throwaway axum backend.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};
use warden_console::{
    ApiClient, Message, Notice, UserAdminApiAdapter, UserAdminService, UserManagementDomain,
};
use warden_core::api_routes::users;
use warden_model::{Permissions, Role, User, UserId, UserStatus};

type Store = Arc<Mutex<Vec<User>>>;

async fn list(State(store): State<Store>) -> Json<Vec<User>> {
    Json(store.lock().unwrap().clone())
}

async fn create(
    State(store): State<Store>,
    Json(user): Json<User>,
) -> Result<(StatusCode, Json<User>), StatusCode> {
    let mut users = store.lock().unwrap();
    if users.iter().any(|u| u.id == user.id) {
        return Err(StatusCode::CONFLICT);
    }
    users.push(user.clone());
    Ok((StatusCode::CREATED, Json(user)))
}

async fn replace(
    State(store): State<Store>,
    Path(id): Path<String>,
    Json(user): Json<User>,
) -> Result<Json<User>, StatusCode> {
    let mut users = store.lock().unwrap();
    let slot = users
        .iter_mut()
        .find(|u| u.id.as_str() == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    *slot = user.clone();
    Ok(Json(user))
}

async fn remove(
    State(store): State<Store>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let mut users = store.lock().unwrap();
    let before = users.len();
    users.retain(|u| u.id.as_str() != id);
    if users.len() == before {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(serde_json::json!({})))
}

/// Accepts the write but answers with no body at all.
async fn create_without_body(
    State(store): State<Store>,
    Json(user): Json<User>,
) -> StatusCode {
    store.lock().unwrap().push(user);
    StatusCode::OK
}

async fn replace_without_body(
    State(store): State<Store>,
    Path(id): Path<String>,
    Json(user): Json<User>,
) -> StatusCode {
    let mut users = store.lock().unwrap();
    match users.iter_mut().find(|u| u.id.as_str() == id) {
        Some(slot) => {
            *slot = user;
            StatusCode::NO_CONTENT
        }
        None => StatusCode::NOT_FOUND,
    }
}

async fn spawn_backend(seed: Vec<User>) -> (String, Store) {
    let store: Store = Arc::new(Mutex::new(seed));
    let app = Router::new()
        .route(users::COLLECTION, get(list).post(create))
        .route(users::ITEM, put(replace).delete(remove))
        .with_state(store.clone());
    (serve(app).await, store)
}

async fn spawn_bodyless_backend(seed: Vec<User>) -> (String, Store) {
    let store: Store = Arc::new(Mutex::new(seed));
    let app = Router::new()
        .route(users::COLLECTION, get(list).post(create_without_body))
        .route(users::ITEM, put(replace_without_body).delete(remove))
        .with_state(store.clone());
    (serve(app).await, store)
}

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    format!("http://{addr}")
}

fn adapter(base_url: &str) -> UserAdminApiAdapter {
    let client = ApiClient::new(base_url, Duration::from_secs(5)).expect("client");
    UserAdminApiAdapter::new(Arc::new(client))
}

fn alice() -> User {
    named("id_alice", "Alice")
}

fn named(id: &str, name: &str) -> User {
    User::new(
        id,
        name,
        format!("{}@x.com", name.to_lowercase()),
        Role::Admin,
        UserStatus::Active,
        Permissions::ALL,
    )
}

fn stored_ids(store: &Store) -> Vec<String> {
    store
        .lock()
        .unwrap()
        .iter()
        .map(|u| u.id.to_string())
        .collect()
}

#[tokio::test]
async fn adapter_covers_all_four_operations() {
    let (base_url, store) = spawn_backend(vec![alice()]).await;
    let service = adapter(&base_url);

    assert_eq!(service.list_users().await.unwrap(), vec![alice()]);

    let bob = User::new(
        "id_bob",
        "Bob",
        "bob@x.com",
        Role::Viewer,
        UserStatus::Inactive,
        Permissions::new(true, false, false),
    );
    assert_eq!(service.add_user(&bob).await.unwrap(), bob);

    let mut promoted = bob.clone();
    promoted.role = Role::Editor;
    promoted.permissions = Permissions::new(true, true, false);
    service.update_user(&bob.id, &promoted).await.unwrap();
    assert_eq!(store.lock().unwrap()[1], promoted);

    service.delete_user(&alice().id).await.unwrap();
    assert_eq!(service.list_users().await.unwrap(), vec![promoted]);
}

#[tokio::test]
async fn error_statuses_surface_as_errors() {
    let (base_url, _store) = spawn_backend(vec![alice()]).await;
    let service = adapter(&base_url);

    let err = service.delete_user(&UserId::from("ghost")).await.unwrap_err();
    assert!(err.to_string().contains("404"), "{err}");

    let err = service.add_user(&alice()).await.unwrap_err();
    assert!(err.to_string().contains("409"), "{err}");
}

#[tokio::test]
async fn unreachable_backend_leaves_controller_recoverable() {
    // Bind then drop a listener so the port is very likely closed.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let mut domain = UserManagementDomain::new(Arc::new(adapter(&format!("http://{addr}"))));
    domain.update(Message::LoadUsers).await;
    assert!(matches!(domain.notice(), Some(Notice::LoadFailed(_))));
    assert!(domain.state.users.is_empty());
}

#[tokio::test]
async fn controller_round_trip_over_http() {
    let (base_url, store) = spawn_backend(Vec::new()).await;
    let mut domain = UserManagementDomain::new(Arc::new(adapter(&base_url)));

    domain.update(Message::NameChanged("Sam".into())).await;
    domain.update(Message::EmailChanged("sam@x.com".into())).await;
    domain.update(Message::RoleSelected(Some(Role::Editor))).await;
    domain.update(Message::Submit).await;

    assert!(domain.notice().is_none(), "{:?}", domain.notice());
    assert_eq!(domain.state.users.len(), 1);
    let stored = store.lock().unwrap()[0].clone();
    assert_eq!(stored, domain.state.users[0]);
    assert_eq!(stored.permissions, Permissions::new(true, true, false));
}

#[tokio::test]
async fn reserved_characters_in_ids_address_the_exact_record() {
    let seed = vec![
        named("7", "Plain"),
        named("7#x", "Hash"),
        named("a/b", "Slash"),
        named("q?1", "Query"),
        named("q", "Prefix"),
    ];
    let (base_url, store) = spawn_backend(seed).await;
    let service = adapter(&base_url);

    service.delete_user(&UserId::from("7#x")).await.unwrap();
    assert_eq!(stored_ids(&store), vec!["7", "a/b", "q?1", "q"]);

    let mut renamed = named("q?1", "Renamed");
    renamed.email = "query@x.com".into();
    service.update_user(&renamed.id, &renamed).await.unwrap();
    {
        let users = store.lock().unwrap();
        assert_eq!(users[2], renamed);
        assert_eq!(users[3].name, "Prefix");
    }

    service.delete_user(&UserId::from("a/b")).await.unwrap();
    assert_eq!(stored_ids(&store), vec!["7", "q?1", "q"]);

    let err = service.delete_user(&UserId::from("7#x")).await.unwrap_err();
    assert!(err.to_string().contains("404"), "{err}");
    assert_eq!(stored_ids(&store), vec!["7", "q?1", "q"]);
}

#[tokio::test]
async fn writes_answered_without_body_still_succeed() {
    let (base_url, store) = spawn_bodyless_backend(vec![alice()]).await;
    let service = adapter(&base_url);

    let bob = named("id_bob", "Bob");
    assert_eq!(service.add_user(&bob).await.unwrap(), bob);

    let mut renamed = alice();
    renamed.name = "Alicia".into();
    assert_eq!(service.update_user(&renamed.id, &renamed).await.unwrap(), renamed);
    assert_eq!(store.lock().unwrap()[0].name, "Alicia");

    let mut domain = UserManagementDomain::new(Arc::new(service));
    domain.update(Message::LoadUsers).await;
    domain.update(Message::EditUser(bob)).await;
    domain.update(Message::NameChanged("Robert".into())).await;
    domain.update(Message::Submit).await;
    assert!(domain.notice().is_none(), "{:?}", domain.notice());
    assert_eq!(store.lock().unwrap()[1].name, "Robert");
}
