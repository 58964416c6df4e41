//! Infrastructure layer
//!
//! HTTP transport, the user admin service seam and its in-memory test
//! double.

pub mod api_client;
pub mod repository;
pub mod services;
pub mod testing;
