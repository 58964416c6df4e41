//! Plain-text rendering of the three console screens.

pub mod admin;
pub mod home;
pub mod users;

use std::fmt::Write;

use crate::app::routes::Route;

/// Title bar shared by every screen; non-home screens advertise "Back".
pub fn header(route: Route) -> String {
    let mut out = String::new();
    let _ = write!(out, "== {} ==", route.title());
    if route != Route::Home {
        let _ = write!(out, "  [Back: {}]", Route::Home.path());
    }
    out.push('\n');
    out
}
