/// Errors raised while talking to the user backend
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    #[error("Entity already exists: {entity_type} with id {id}")]
    Conflict { entity_type: String, id: String },

    #[error("Request failed with status {status}: {body}")]
    RequestFailed { status: u16, body: String },

    #[error("Query failed: {0}")]
    QueryFailed(String),

    #[error("Lock acquisition failed: {0}")]
    LockError(String),
}

impl RepositoryError {
    pub fn user_not_found(id: impl Into<String>) -> Self {
        RepositoryError::NotFound {
            entity_type: "User".to_string(),
            id: id.into(),
        }
    }
}
