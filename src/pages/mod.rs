//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page is rendered by the route outlet after the guard has passed it.
//! Pages read `AppRouter` and `ViewCache` from context; input checks live in
//! plain functions next to the component so they can be tested natively.

pub mod forgot;
pub mod forms;
pub mod generate;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod register;
