//! Application shell: route table and navigation state.

pub mod routes;
