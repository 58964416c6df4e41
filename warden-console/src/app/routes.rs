//! Console routes
//!
//! Three screens, no parameters and no guards. Every screen other than home
//! offers a single "Back" action that returns to home.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    /// Navigation menu and welcome banner
    #[default]
    Home,
    /// Users grouped by role
    AdminDashboard,
    /// User table and form
    UserManagement,
}

impl Route {
    pub const HOME: &'static str = "/";
    pub const ADMIN: &'static str = "/admin";
    pub const USERS: &'static str = "/users";

    pub fn all() -> &'static [Route] {
        &[Route::Home, Route::AdminDashboard, Route::UserManagement]
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => Self::HOME,
            Route::AdminDashboard => Self::ADMIN,
            Route::UserManagement => Self::USERS,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::AdminDashboard => "Admin Dashboard",
            Route::UserManagement => "User Management",
        }
    }

    /// Routes listed in the home navigation menu.
    pub fn menu() -> &'static [Route] {
        &[Route::AdminDashboard, Route::UserManagement]
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Route {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::all()
            .iter()
            .copied()
            .find(|route| route.path() == s)
            .ok_or_else(|| format!("Unknown route: {}", s))
    }
}

/// Tracks the route currently on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Navigator {
    current: Route,
}

impl Navigator {
    pub fn current(&self) -> Route {
        self.current
    }

    pub fn navigate(&mut self, route: Route) {
        log::debug!("Navigating {} -> {}", self.current, route);
        self.current = route;
    }

    /// Back always lands on home.
    pub fn back(&mut self) {
        self.navigate(Route::Home);
    }
}
