//! Domain controllers
//!
//! Each domain owns the state behind one route and the async operations
//! that mutate it.

pub mod admin_dashboard;
pub mod user_management;
