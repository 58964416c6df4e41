//! Warden console
//!
//! Terminal front end for the user backend: a home screen, a role summary
//! dashboard and a user table with create, update and delete.

pub mod app;
pub mod cli;
pub mod config;
pub mod domains;
pub mod infrastructure;
pub mod views;

pub use app::routes::{Navigator, Route};
pub use config::{AppConfig, Config, ConfigError};
pub use domains::admin_dashboard::AdminDashboard;
pub use domains::user_management::{
    Notice, UserManagementDomain, UserManagementState, messages::Message,
};
pub use infrastructure::api_client::ApiClient;
pub use infrastructure::services::user_management::{
    UserAdminApiAdapter, UserAdminService,
};
pub use infrastructure::testing::{ServiceCall, TestUserAdminService};
