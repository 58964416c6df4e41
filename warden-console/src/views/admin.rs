use std::fmt::Write;

use crate::app::routes::Route;
use crate::domains::admin_dashboard::AdminDashboard;

pub fn render(dashboard: &AdminDashboard) -> String {
    let mut out = super::header(Route::AdminDashboard);
    for (title, empty, members) in dashboard.buckets.sections() {
        let _ = writeln!(out, "\n{title}");
        if dashboard.loading {
            out.push_str("  Loading...\n");
        } else if members.is_empty() {
            let _ = writeln!(out, "  {empty}");
        } else {
            for user in members {
                let _ = writeln!(out, "  {} ({})", user.name, user.email);
            }
        }
    }
    out
}
