use std::fmt::Write;

use crate::app::routes::Route;

pub fn render() -> String {
    let mut out = super::header(Route::Home);
    for route in Route::menu() {
        let _ = writeln!(out, "  {:<16} warden {}", route.title(), command_for(*route));
    }
    out.push('\n');
    out.push_str("Welcome to the Role Based Access Control\n");
    out.push_str("(RBAC)\n");
    out
}

fn command_for(route: Route) -> &'static str {
    match route {
        Route::Home => "home",
        Route::AdminDashboard => "admin",
        Route::UserManagement => "users list",
    }
}
