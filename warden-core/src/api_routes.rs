//! REST routes exposed by the user backend.
//!
//! Record ids are opaque strings; clients must encode them as a single path
//! segment when filling in [`users::ITEM`].

/// User collection routes
pub mod users {
    pub const COLLECTION: &str = "/users";
    pub const ITEM: &str = "/users/{id}";
}
