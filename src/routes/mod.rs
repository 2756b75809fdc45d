//! Client-side navigation.
//!
//! ARCHITECTURE
//! ============
//! `table` lists the routes, `guard` decides whether a navigation may proceed,
//! `navigator` strings both together into a resolution, and `outlet` renders
//! that resolution inside the Leptos router. `view_cache` backs keep-alive
//! views.

pub mod guard;
pub mod location;
pub mod navigator;
pub mod outlet;
pub mod table;
pub mod view_cache;
