//! Backend access.

pub mod api;
