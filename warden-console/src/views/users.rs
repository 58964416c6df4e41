use std::fmt::Write;

use warden_core::{SortKey, assignable_roles};
use warden_model::{Role, User};

use crate::app::routes::Route;
use crate::domains::user_management::UserManagementState;

const NO_RESULTS: &str = "No results found";
const STALE: &str = "(list may be out of date; reload to refresh)";

pub fn render(state: &UserManagementState) -> String {
    let mut out = super::header(Route::UserManagement);
    render_form(&mut out, state);
    let _ = writeln!(
        out,
        "\nStatus: {}  Search: {:?}",
        state.status_filter, state.search_query
    );
    if state.stale {
        let _ = writeln!(out, "{STALE}");
    }
    render_table(&mut out, state);
    out
}

fn render_form(out: &mut String, state: &UserManagementState) {
    let draft = &state.draft;
    let _ = writeln!(out, "\n[{}]", draft.submit_label());
    if !draft.id().is_empty() {
        let _ = writeln!(out, "  id:          {}", draft.id());
    }
    let _ = writeln!(out, "  name:        {}", draft.name());
    let lock = if draft.email_locked() { " (locked)" } else { "" };
    let _ = writeln!(out, "  email:       {}{}", draft.email(), lock);
    let _ = writeln!(out, "  status:      {}", draft.status());
    match draft.role() {
        Some(role) => {
            let _ = writeln!(out, "  role:        {}", role);
            let _ = writeln!(out, "  permissions: {}", draft.permissions());
        }
        None => {
            let options: Vec<&str> = assignable_roles().iter().map(Role::as_str).collect();
            let _ = writeln!(
                out,
                "  role:        -- Select access -- ({})",
                options.join(" | ")
            );
        }
    }
}

fn render_table(out: &mut String, state: &UserManagementState) {
    let view = state.view();
    let headers = [
        format!("Name {}", state.sort.indicator(SortKey::Name)),
        format!("Email {}", state.sort.indicator(SortKey::Email)),
        "Role".to_string(),
        "Status".to_string(),
        "Id".to_string(),
    ];
    let rows: Vec<[String; 5]> = view.iter().map(row_cells).collect();

    let mut widths = headers.clone().map(|h| h.trim_end().chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let _ = writeln!(out);
    write_row(out, &headers, &widths);
    let total: usize = widths.iter().sum::<usize>() + 3 * (widths.len() - 1);
    let _ = writeln!(out, "{}", "-".repeat(total));

    if view.no_results() {
        let _ = writeln!(out, "{NO_RESULTS}");
        return;
    }
    for row in &rows {
        write_row(out, row, &widths);
    }
}

fn row_cells(user: &User) -> [String; 5] {
    [
        user.name.clone(),
        user.email.clone(),
        user.role.to_string(),
        user.status.to_string(),
        user.id.to_string(),
    ]
}

fn write_row(out: &mut String, cells: &[String; 5], widths: &[usize; 5]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell.trim_end(), width = *width))
        .collect::<Vec<_>>()
        .join(" | ");
    let _ = writeln!(out, "{}", line.trim_end());
}
