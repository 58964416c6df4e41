//! Service traits consumed by the domains, with their HTTP adapters.

pub mod user_management;
