//! Client-side logic for the Warden user administration console.
//!
//! Everything in this crate is synchronous and free of I/O: the role policy
//! table, the dashboard role buckets, the sort/filter/search pipeline that
//! produces the user table, and the draft form that stages a record before
//! it is sent to the backend.

pub mod api_routes;
pub mod dashboard;
pub mod draft;
pub mod rbac;
pub mod view;

pub use warden_model as model;

pub use dashboard::RoleBuckets;
pub use draft::{DraftError, DraftForm, DraftMode};
pub use rbac::{assignable_roles, permissions_for, permissions_for_name};
pub use view::{
    DerivedView, SortConfig, SortDirection, SortKey, StatusFilter, derive_view,
};
