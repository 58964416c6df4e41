//! Command-line front end
//!
//! Each invocation opens one route, performs at most one backend mutation
//! and prints the resulting screen. Failure notices go to stderr and turn
//! into a non-zero exit code.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use log::info;
use warden_core::{SortConfig, SortDirection, SortKey, StatusFilter};
use warden_model::{Role, UserId, UserStatus};

use crate::app::routes::{Navigator, Route};
use crate::config::{AppConfig, Config, parse_timeout};
use crate::domains::admin_dashboard::AdminDashboard;
use crate::domains::user_management::{UserManagementDomain, messages::Message};
use crate::infrastructure::api_client::ApiClient;
use crate::infrastructure::services::user_management::{
    UserAdminApiAdapter, UserAdminService,
};
use crate::infrastructure::testing::TestUserAdminService;
use crate::views;

#[derive(Debug, Parser)]
#[command(name = "warden", version, about = "User and role administration console")]
pub struct Cli {
    /// Base URL of the user backend (overrides config and WARDEN_SERVER_URL)
    #[arg(long, global = true, value_name = "URL")]
    pub server: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, global = true, value_name = "SECS", value_parser = parse_timeout_arg)]
    pub timeout: Option<u64>,

    /// Use a built-in sample directory instead of the backend; changes are
    /// discarded on exit
    #[arg(long, global = true)]
    pub offline: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Navigation menu
    Home,
    /// Users grouped by role
    Admin,
    /// Manage user records
    Users {
        #[command(subcommand)]
        action: UsersCommand,
    },
    /// Inspect or persist console settings
    Config {
        #[command(subcommand)]
        action: ConfigCommand,
    },
}

#[derive(Debug, Subcommand)]
pub enum UsersCommand {
    /// Show the user table
    List(ListArgs),
    /// Create a user; permissions follow the role
    Add(AddArgs),
    /// Change an existing user; email cannot be changed
    Update(UpdateArgs),
    /// Delete a user by id
    Delete {
        /// Id of the user to delete
        id: String,
    },
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Status filter: all, active or inactive
    #[arg(long, default_value = "all")]
    pub status: StatusFilter,

    /// Case-insensitive match on name or email
    #[arg(long, default_value = "")]
    pub search: String,

    /// Sort column: name or email
    #[arg(long)]
    pub sort: Option<SortKey>,

    /// Sort descending
    #[arg(long)]
    pub desc: bool,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,

    /// Admin, Editor or Viewer; without one the user gets no permissions
    #[arg(long)]
    pub role: Option<Role>,

    #[arg(long, default_value = "active")]
    pub status: UserStatus,
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Id of the user to update
    pub id: String,

    #[arg(long)]
    pub name: Option<String>,

    /// New role; permissions are re-derived only when this is given
    #[arg(long)]
    pub role: Option<Role>,

    #[arg(long)]
    pub status: Option<UserStatus>,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the effective settings
    Show,
    /// Write the effective settings to the user config file
    Save,
}

fn parse_timeout_arg(raw: &str) -> Result<u64, String> {
    parse_timeout(raw).map_err(|err| err.to_string())
}

impl Cli {
    fn resolve_config(&self) -> Result<Config> {
        let mut config = Config::load();
        config.apply_process_env()?;
        if let Some(server) = &self.server {
            config.server_url = server.clone();
        }
        if let Some(timeout) = self.timeout {
            config.request_timeout_secs = timeout;
        }
        Ok(config)
    }

    fn route(&self) -> Route {
        match &self.command {
            None | Some(Command::Home) | Some(Command::Config { .. }) => Route::Home,
            Some(Command::Admin) => Route::AdminDashboard,
            Some(Command::Users { .. }) => Route::UserManagement,
        }
    }
}

pub fn build_service(config: &AppConfig) -> Result<Arc<dyn UserAdminService>> {
    if config.offline {
        info!("Offline mode: serving the sample directory");
        return Ok(Arc::new(TestUserAdminService::seeded()));
    }
    let client = ApiClient::new(config.server_url(), config.request_timeout)?;
    Ok(Arc::new(UserAdminApiAdapter::new(Arc::new(client))))
}

pub async fn run(cli: Cli) -> Result<ExitCode> {
    let config = cli.resolve_config()?;
    let app_config = AppConfig::from_config(&config, cli.offline)?;

    let mut navigator = Navigator::default();
    navigator.navigate(cli.route());

    let command = match cli.command.unwrap_or(Command::Home) {
        Command::Config { action } => return run_config(action, &config),
        command => command,
    };

    let service = build_service(&app_config)?;
    match navigator.current() {
        Route::Home => {
            print!("{}", views::home::render());
            Ok(ExitCode::SUCCESS)
        }
        Route::AdminDashboard => {
            let mut dashboard = AdminDashboard::new(service);
            dashboard.load().await;
            print!("{}", views::admin::render(&dashboard));
            if dashboard.load_failed {
                eprintln!("Failed to load users");
                return Ok(ExitCode::FAILURE);
            }
            Ok(ExitCode::SUCCESS)
        }
        Route::UserManagement => {
            let Command::Users { action } = command else {
                return Ok(ExitCode::SUCCESS);
            };
            let mut domain =
                UserManagementDomain::new(service).with_sort(app_config.default_sort);
            run_users(&mut domain, action).await
        }
    }
}

async fn run_users(domain: &mut UserManagementDomain, action: UsersCommand) -> Result<ExitCode> {
    domain.update(Message::LoadUsers).await;
    if domain.notice().is_some() {
        return Ok(finish(domain));
    }

    match action {
        UsersCommand::List(args) => {
            if let Some(key) = args.sort {
                let direction = if args.desc {
                    SortDirection::Descending
                } else {
                    SortDirection::Ascending
                };
                domain.update(Message::SortChanged(SortConfig::new(key, direction))).await;
            } else if args.desc {
                let mut sort = domain.state.sort;
                sort.direction = SortDirection::Descending;
                domain.update(Message::SortChanged(sort)).await;
            }
            domain.update(Message::StatusFilterChanged(args.status)).await;
            domain.update(Message::SearchChanged(args.search)).await;
        }
        UsersCommand::Add(args) => {
            domain.update(Message::NameChanged(args.name)).await;
            domain.update(Message::EmailChanged(args.email)).await;
            domain.update(Message::StatusChanged(args.status)).await;
            domain.update(Message::RoleSelected(args.role)).await;
            domain.update(Message::Submit).await;
        }
        UsersCommand::Update(args) => {
            let id = UserId::new(args.id);
            let Some(user) = domain.find_user(&id).cloned() else {
                eprintln!("No user with id {id}");
                return Ok(ExitCode::FAILURE);
            };
            domain.update(Message::EditUser(user)).await;
            if let Some(name) = args.name {
                domain.update(Message::NameChanged(name)).await;
            }
            if let Some(status) = args.status {
                domain.update(Message::StatusChanged(status)).await;
            }
            if let Some(role) = args.role {
                domain.update(Message::RoleSelected(Some(role))).await;
            }
            domain.update(Message::Submit).await;
        }
        UsersCommand::Delete { id } => {
            domain.update(Message::DeleteUser(UserId::new(id))).await;
        }
    }

    Ok(finish(domain))
}

fn finish(domain: &UserManagementDomain) -> ExitCode {
    print!("{}", views::users::render(&domain.state));
    match domain.notice() {
        Some(notice) => {
            eprintln!("{notice}");
            ExitCode::FAILURE
        }
        None => ExitCode::SUCCESS,
    }
}

fn run_config(action: ConfigCommand, config: &Config) -> Result<ExitCode> {
    match action {
        ConfigCommand::Show => {
            println!("{}", serde_json::to_string_pretty(config)?);
        }
        ConfigCommand::Save => {
            let path = config.save()?;
            println!("Saved settings to {}", path.display());
        }
    }
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_user_commands() {
        let cli = Cli::try_parse_from([
            "warden", "--offline", "users", "add", "--name", "Sam", "--email", "sam@x.com",
            "--role", "editor",
        ])
        .unwrap();
        assert!(cli.offline);
        assert_eq!(cli.route(), Route::UserManagement);
        match cli.command {
            Some(Command::Users { action: UsersCommand::Add(args) }) => {
                assert_eq!(args.role, Some(Role::Editor));
                assert_eq!(args.status, UserStatus::Active);
            }
            other => panic!("unexpected command: {other:?}"),
        }

        assert!(
            Cli::try_parse_from([
                "warden", "users", "add", "--name", "A", "--email", "a@x", "--role", "guest",
            ])
            .is_err()
        );
        assert!(Cli::try_parse_from(["warden", "--timeout", "0", "home"]).is_err());
    }
}
